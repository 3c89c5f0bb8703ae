use log::debug;
use serde_json::Value;

use crate::backend::{Ledger, RestLedger, TxResponse};
use crate::core::{decode, DecodeError, Envelope, GasInfo, Result, Session, Verb};

/// Key-value view of one account's namespace on the ledger.
///
/// `read`, `has` and `keys` go through a transaction so the answer is
/// agreed on by the network. The `quick*` variants ask a single node
/// and skip signing.
pub struct KvClient<L> {
    ledger: L,
    session: Session,
}

impl KvClient<RestLedger> {
    /// Client over HTTP to the session's endpoint.
    pub fn connect(session: Session) -> Result<KvClient<RestLedger>> {
        let ledger = RestLedger::new(session.endpoint())?;
        Ok(KvClient::new(ledger, session))
    }
}

impl<L: Ledger> KvClient<L> {
    pub fn new(ledger: L, session: Session) -> KvClient<L> {
        KvClient { ledger, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub async fn init(&self) -> Result<bool> {
        debug!("init session for {} at {}", self.session.address(), self.session.endpoint());
        self.ledger.init(self.session.mnemonic(), self.session.endpoint()).await
    }

    pub async fn create(&self, key: &str, value: &str, gas_info: &GasInfo) -> Result<()> {
        let envelope = self.envelope().with_key(key).with_value(value);
        self.transact(Verb::Post, "create", &envelope, gas_info).await?;
        Ok(())
    }

    pub async fn read(&self, key: &str, gas_info: &GasInfo) -> Result<String> {
        let envelope = self.envelope().with_key(key);
        let object = self.transact_decoded("read", &envelope, gas_info).await?;
        Ok(decode::string_field(&object, "value")?)
    }

    pub async fn update(&self, key: &str, value: &str, gas_info: &GasInfo) -> Result<()> {
        let envelope = self.envelope().with_key(key).with_value(value);
        self.transact(Verb::Post, "update", &envelope, gas_info).await?;
        Ok(())
    }

    pub async fn delete(&self, key: &str, gas_info: &GasInfo) -> Result<()> {
        let envelope = self.envelope().with_key(key);
        self.transact(Verb::Delete, "delete", &envelope, gas_info).await?;
        Ok(())
    }

    pub async fn has(&self, key: &str, gas_info: &GasInfo) -> Result<bool> {
        let envelope = self.envelope().with_key(key);
        let object = self.transact_decoded("has", &envelope, gas_info).await?;
        Ok(decode::bool_field(&object, "has")?)
    }

    pub async fn keys(&self, gas_info: &GasInfo) -> Result<Vec<String>> {
        let envelope = self.envelope();
        let object = self.transact_decoded("keys", &envelope, gas_info).await?;
        Ok(decode::strings_field(&object, "keys")?)
    }

    /// Reads straight from a node. With `verified` set the node is asked
    /// for a proven read (`pread`) instead of its local state.
    pub async fn quickread(&self, key: &str, verified: bool) -> Result<String> {
        let route = if verified { "pread" } else { "read" };
        let object = self.query(&format!("{}/{}/{}", route, self.session.address(), key)).await?;
        Ok(decode::string_field(&object, "value")?)
    }

    pub async fn quickhas(&self, key: &str) -> Result<bool> {
        let object = self.query(&format!("has/{}/{}", self.session.address(), key)).await?;
        Ok(decode::bool_field(&object, "has")?)
    }

    pub async fn quickkeys(&self) -> Result<Vec<String>> {
        let object = self.query(&format!("keys/{}", self.session.address())).await?;
        Ok(decode::strings_field(&object, "keys")?)
    }

    fn envelope(&self) -> Envelope {
        Envelope::new(&self.session)
    }

    async fn transact(&self, verb: Verb, endpoint_name: &str, envelope: &Envelope, gas_info: &GasInfo)
        -> Result<Option<TxResponse>> {
        debug!("{} {} key={:?}", verb, endpoint_name, envelope.key);
        self.ledger.send_transaction(verb, endpoint_name, envelope, gas_info).await
    }

    /// Transaction whose result comes back as hex-encoded JSON.
    async fn transact_decoded(&self, endpoint_name: &str, envelope: &Envelope, gas_info: &GasInfo) -> Result<Value> {
        let response = self.transact(Verb::Post, endpoint_name, envelope, gas_info).await?
            .ok_or(DecodeError::MissingField("data"))?;
        Ok(decode::hex_json(&response.data)?)
    }

    async fn query(&self, path: &str) -> Result<Value> {
        debug!("query {}", path);
        self.ledger.query(path).await
    }
}
