use async_trait::async_trait;
use log::{trace, warn};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde_json::Value;

use crate::backend::interface::{Ledger, TxResponse};
use crate::core::{Envelope, GasInfo, Verb, Error, Result};

/// [`Ledger`] talking to a node's `crud` REST module over HTTP.
///
/// Signing and broadcasting happen behind the node's transaction
/// endpoints; this type only moves envelopes and results.
pub struct RestLedger {
    http: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct TxRequest<'a> {
    #[serde(flatten)]
    envelope: &'a Envelope,
    gas_info: &'a GasInfo,
}

impl RestLedger {
    pub fn new(endpoint: &str) -> Result<RestLedger> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("HTTP client build failed: {e}")))?;
        Ok(RestLedger::with_client(http, endpoint))
    }

    pub fn with_client(http: Client, endpoint: &str) -> RestLedger {
        RestLedger { http, endpoint: endpoint.trim_end_matches('/').to_owned() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `{endpoint}/crud/{path}` with every segment of `path` percent-encoded,
    /// so a key holding `#`, `?` or spaces reaches the node as written.
    fn crud_url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {e}", self.endpoint)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("endpoint '{}' cannot take a path", self.endpoint)))?
            .pop_if_empty()
            .push("crud")
            .extend(path.split('/'));
        Ok(url)
    }

    /// Body of a successful response, or the node's own error message.
    async fn into_body(response: Response) -> Result<String> {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }

        let message = rejection_message(&body).unwrap_or_else(|| status.to_string());
        warn!("{} rejected with {}: {}", url, status, message);
        Err(Error::Rejected(message))
    }
}

/// Nodes answer failures either with `{"error": "..."}` or with plain text.
fn rejection_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    let from_json = serde_json::from_str::<Value>(body).ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_owned));
    Some(from_json.unwrap_or_else(|| body.to_owned()))
}

#[async_trait]
impl Ledger for RestLedger {
    async fn init(&self, mnemonic: &str, endpoint: &str) -> Result<bool> {
        if mnemonic.trim().is_empty() {
            return Err(Error::Config("mnemonic must not be empty".to_owned()));
        }

        let url = format!("{}/node_info", endpoint.trim_end_matches('/'));
        trace!("GET {}", url);
        RestLedger::into_body(self.http.get(&url).send().await?).await?;
        Ok(true)
    }

    async fn send_transaction(&self, verb: Verb, endpoint_name: &str, envelope: &Envelope, gas_info: &GasInfo)
        -> Result<Option<TxResponse>> {
        let method = match verb {
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE
        };
        let url = self.crud_url(endpoint_name)?;
        trace!("{} {}", method, url);

        let response = self.http.request(method, url)
            .json(&TxRequest { envelope, gas_info })
            .send()
            .await?;
        let body = RestLedger::into_body(response).await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        let tx = serde_json::from_str(&body).map_err(crate::core::DecodeError::from)?;
        Ok(Some(tx))
    }

    async fn query(&self, path: &str) -> Result<Value> {
        let url = self.crud_url(path)?;
        trace!("GET {}", url);

        let body = RestLedger::into_body(self.http.get(url).send().await?).await?;
        let mut value: Value = serde_json::from_str(&body).map_err(crate::core::DecodeError::from)?;
        Ok(match value.get_mut("result") {
            Some(result) => result.take(),
            None => value
        })
    }
}
