//! Response payload decoding.
//!
//! Transaction responses carry their result as hex-encoded JSON, while
//! queries return plain JSON. The two are kept apart on purpose: they are
//! different encodings on the wire.

use serde_json::Value;

use crate::core::error::DecodeError;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Hex string -> UTF-8 text -> JSON object.
pub fn hex_json(payload: &str) -> DecodeResult<Value> {
    let bytes = hex::decode(payload.trim())?;
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn string_field(object: &Value, field: &'static str) -> DecodeResult<String> {
    object.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(DecodeError::MissingField(field))
}

pub fn bool_field(object: &Value, field: &'static str) -> DecodeResult<bool> {
    object.get(field)
        .and_then(Value::as_bool)
        .ok_or(DecodeError::MissingField(field))
}

/// A JSON `null` is what the ledger sends for an empty key list.
pub fn strings_field(object: &Value, field: &'static str) -> DecodeResult<Vec<String>> {
    match object.get(field) {
        Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter()
            .map(|item| item.as_str().map(str::to_owned).ok_or(DecodeError::MissingField(field)))
            .collect(),
        _ => Err(DecodeError::MissingField(field))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(r#"{"value": "value"}"#)]
    #[case(r#"{"value": "zürich ☃"}"#)]
    fn decodes_hex_json(#[case] text: &str) {
        let decoded = hex_json(&hex::encode(text)).unwrap();
        assert_eq!(decoded, serde_json::from_str::<Value>(text).unwrap());
    }

    #[test]
    fn accepts_uppercase_hex() {
        let payload = hex::encode_upper(r#"{"has": true}"#);
        assert_eq!(bool_field(&hex_json(&payload).unwrap(), "has").unwrap(), true);
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(hex_json("7b2g"), Err(DecodeError::Hex(_))));
        assert!(matches!(hex_json("7b2"), Err(DecodeError::Hex(_))));
    }

    #[test]
    fn rejects_bad_utf8() {
        assert!(matches!(hex_json("ff"), Err(DecodeError::Utf8(_))));
    }

    #[test]
    fn rejects_bad_json() {
        let payload = hex::encode("{\"value\": ");
        assert!(matches!(hex_json(&payload), Err(DecodeError::Json(_))));
    }

    #[test]
    fn keys_keep_order() {
        let object = json!({"keys": ["key3", "key1", "key2"]});
        assert_eq!(strings_field(&object, "keys").unwrap(), vec!["key3", "key1", "key2"]);
    }

    #[test]
    fn null_keys_are_empty() {
        assert!(strings_field(&json!({"keys": null}), "keys").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_types() {
        assert!(matches!(string_field(&json!({"value": 1}), "value"), Err(DecodeError::MissingField("value"))));
        assert!(matches!(bool_field(&json!({"has": "yes"}), "has"), Err(DecodeError::MissingField("has"))));
        assert!(matches!(strings_field(&json!({"keys": [1]}), "keys"), Err(DecodeError::MissingField("keys"))));
        assert!(matches!(strings_field(&json!({}), "keys"), Err(DecodeError::MissingField("keys"))));
    }
}
