use std::{fmt, fs, path::Path};
use serde::Deserialize;
use toml;
use anyhow::{self, Context};

use crate::core::error::{Error, Result};

/// Identity and endpoint of one account talking to the ledger.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    address: String,
    mnemonic: String,
    endpoint: String,
    uuid: String,
    chain_id: String,
}

/// On-disk shape of a session file.
#[derive(Deserialize)]
struct SessionFile {
    address: String,
    mnemonic: String,
    endpoint: String,
    chain_id: String,
    uuid: Option<String>
}

impl Session {
    /// The namespace identifier defaults to the account address.
    pub fn new(address: &str, mnemonic: &str, endpoint: &str, chain_id: &str) -> Result<Session> {
        for (name, field) in [("address", address), ("endpoint", endpoint), ("chain_id", chain_id)] {
            if field.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", name)));
            }
        }

        Ok(Session {
            address: address.to_owned(),
            mnemonic: mnemonic.to_owned(),
            endpoint: endpoint.to_owned(),
            uuid: address.to_owned(),
            chain_id: chain_id.to_owned()
        })
    }

    pub fn with_uuid(mut self, uuid: &str) -> Session {
        self.uuid = uuid.to_owned();
        self
    }

    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read session file")?;
        Self::parse(&file_content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let file: SessionFile = toml::from_str(content)
            .with_context(|| "failed to parse session file")?;

        let session = Session::new(&file.address, &file.mnemonic, &file.endpoint, &file.chain_id)?;
        return Ok(match file.uuid {
            Some(uuid) => session.with_uuid(&uuid),
            None => session
        });
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("address", &self.address)
            .field("mnemonic", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("uuid", &self.uuid)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
