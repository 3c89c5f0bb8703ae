pub mod session;
pub mod envelope;
pub mod decode;
pub mod error;

pub use session::Session;
pub use envelope::{Envelope, BaseReq, GasInfo, Verb};
pub use error::{Error, DecodeError, Result};
