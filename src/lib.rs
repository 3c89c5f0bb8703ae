//! Key-value access to an account's namespace on a ledger, over the
//! ledger's REST endpoint.
//!
//! [`KvClient`] builds the request envelopes and decodes results;
//! anything that implements [`backend::Ledger`] does the signing,
//! broadcasting and querying. [`backend::RestLedger`] is the HTTP one.

mod core;
mod client;
pub mod backend;

pub use crate::core::{Session, Envelope, BaseReq, GasInfo, Verb};
pub use crate::core::{Error, DecodeError, Result};
pub use crate::core::decode;
pub use crate::client::KvClient;
