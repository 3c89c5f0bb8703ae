use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::session::Session;

/// HTTP verb a transaction is submitted with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verb {
    Post,
    Delete
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Delete => "delete"
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fee configuration for a transaction. The client never looks
/// inside it, it only hands it over to the ledger.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct GasInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gas: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BaseReq {
    pub from: String,
    pub chain_id: String,
}

/// Request body of a single CRUD call.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "BaseReq")]
    pub base_req: BaseReq,
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Envelope {
    /// Envelope carrying only the identity fields of `session`.
    pub fn new(session: &Session) -> Envelope {
        Envelope {
            base_req: BaseReq {
                from: session.address().to_owned(),
                chain_id: session.chain_id().to_owned()
            },
            uuid: session.uuid().to_owned(),
            owner: session.address().to_owned(),
            key: None,
            value: None
        }
    }

    pub fn with_key(mut self, key: &str) -> Envelope {
        self.key = Some(key.to_owned());
        self
    }

    pub fn with_value(mut self, value: &str) -> Envelope {
        self.value = Some(value.to_owned());
        self
    }
}
