use thiserror::Error;

use crate::mx::Error as MxError;

/// Failures while building a [`Verifier`](crate::Verifier). Verification
/// itself never fails.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Resolver(#[from] MxError),
    #[cfg(feature = "with-serde")]
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}
