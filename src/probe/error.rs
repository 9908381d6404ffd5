use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("connection to {addr} timed out after {after:?}")]
    Timeout { addr: String, after: Duration },
}

impl ProbeError {
    pub(crate) fn connect(host: &str, port: u16, source: std::io::Error) -> Self {
        Self::Connect {
            addr: format!("{host}:{port}"),
            source,
        }
    }

    pub(crate) fn timeout(host: &str, port: u16, after: Duration) -> Self {
        Self::Timeout {
            addr: format!("{host}:{port}"),
            after,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
