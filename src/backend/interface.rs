use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::core::{Envelope, GasInfo, Verb, Result};

/// Body of a successful transaction. `data` holds the hex-encoded
/// JSON result for the endpoints that return one.
#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct TxResponse {
    #[serde(default)]
    pub data: String,
}

/// Whatever signs, broadcasts and queries on behalf of the client.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Establishes the signing session for `mnemonic` against `endpoint`.
    async fn init(&self, mnemonic: &str, endpoint: &str) -> Result<bool>;

    async fn send_transaction(&self, verb: Verb, endpoint_name: &str, envelope: &Envelope, gas_info: &GasInfo)
        -> Result<Option<TxResponse>>;

    /// Unsigned read. Returns the already-parsed JSON result.
    async fn query(&self, path: &str) -> Result<Value>;
}
