mod interface;
mod rest;
#[cfg(test)]
pub(crate) mod mock;

pub use interface::{Ledger, TxResponse};
pub use rest::RestLedger;
