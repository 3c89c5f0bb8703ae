use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::interface::{Ledger, TxResponse};
use crate::core::{Envelope, GasInfo, Verb, Error, Result};

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Call {
    Init { mnemonic: String, endpoint: String },
    Transaction { verb: Verb, endpoint_name: String, envelope: Envelope, gas_info: GasInfo },
    Query { path: String },
}

/// Ledger that records every call and answers with a canned reply.
#[derive(Default)]
pub(crate) struct MockLedger {
    calls: Mutex<Vec<Call>>,
    tx_reply: Option<TxResponse>,
    query_reply: Value,
    failure: Option<String>,
}

impl MockLedger {
    /// Transactions answer with `text` hex-encoded, like a real node.
    pub fn replying_hex(text: &str) -> MockLedger {
        MockLedger { tx_reply: Some(TxResponse { data: hex::encode(text) }), ..Default::default() }
    }

    pub fn replying_raw(data: &str) -> MockLedger {
        MockLedger { tx_reply: Some(TxResponse { data: data.to_owned() }), ..Default::default() }
    }

    pub fn replying_query(value: Value) -> MockLedger {
        MockLedger { query_reply: value, ..Default::default() }
    }

    pub fn failing(msg: &str) -> MockLedger {
        MockLedger { failure: Some(msg.to_owned()), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome<T>(&self, call: Call, reply: T) -> Result<T> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(msg) => Err(Error::rejected(msg.as_str())),
            None => Ok(reply)
        }
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn init(&self, mnemonic: &str, endpoint: &str) -> Result<bool> {
        self.outcome(Call::Init { mnemonic: mnemonic.to_owned(), endpoint: endpoint.to_owned() }, true)
    }

    async fn send_transaction(&self, verb: Verb, endpoint_name: &str, envelope: &Envelope, gas_info: &GasInfo)
        -> Result<Option<TxResponse>> {
        let call = Call::Transaction {
            verb,
            endpoint_name: endpoint_name.to_owned(),
            envelope: envelope.clone(),
            gas_info: gas_info.clone()
        };
        self.outcome(call, self.tx_reply.clone())
    }

    async fn query(&self, path: &str) -> Result<Value> {
        self.outcome(Call::Query { path: path.to_owned() }, self.query_reply.clone())
    }
}
