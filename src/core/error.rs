use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The ledger refused the request. The message is the one the
    /// node sent back, untouched.
    #[error("{0}")]
    Rejected(String),
    /// The node could not be reached at all.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Session or client settings that cannot be used.
    #[error("configuration error: {0}")]
    Config(String),
    /// The node answered, but the payload could not be decoded.
    #[error("decode fault: {0}")]
    Decode(#[from] DecodeError),
}

/// Failures turning a response payload back into a plain value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Transaction data is not a hex string.
    #[error("payload is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Hex decoded to bytes that are not UTF-8 text.
    #[error("payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Text is not a JSON document.
    #[error("payload is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    /// Result object lacks the field, or it has the wrong type.
    #[error("payload has no usable `{0}` field")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Error::Rejected(msg.into())
    }
}
