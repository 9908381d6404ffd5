//! TOML configuration file (`with-serde` feature).
//!
//! ```toml
//! dns_timeout_ms = 5000
//! connect_timeout_ms = 5000
//! smtp_port = 25
//! mx_ordering = "resolver"        # or "preference"
//! catch_all_heuristic = true
//!
//! [disposable]
//! extra_domains = ["burner.example"]
//! replace_builtin = false
//! ```
//!
//! Every key is optional; missing ones keep the [`VerifyOptions`] defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::disposable::DisposableDomains;
use crate::mx::MxOrdering;
use crate::verify::VerifyOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub dns_timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
    pub smtp_port: Option<u16>,
    pub mx_ordering: Option<MxOrdering>,
    pub catch_all_heuristic: Option<bool>,
    pub disposable: DisposableSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisposableSection {
    pub extra_domains: Vec<String>,
    /// Use `extra_domains` alone, without the builtin list.
    pub replace_builtin: bool,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid {
                field: "dns_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.connect_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.smtp_port == Some(0) {
            return Err(ConfigError::Invalid {
                field: "smtp_port",
                reason: "port 0 cannot be dialed".to_string(),
            });
        }
        Ok(())
    }

    /// Overwrites the fields of `options` this file sets.
    pub fn apply_to(&self, options: &mut VerifyOptions) {
        if let Some(ms) = self.dns_timeout_ms {
            options.dns_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = self.connect_timeout_ms {
            options.connect_timeout = Duration::from_millis(ms);
        }
        if let Some(port) = self.smtp_port {
            options.smtp_port = port;
        }
        if let Some(ordering) = self.mx_ordering {
            options.mx_ordering = ordering;
        }
        if let Some(enabled) = self.catch_all_heuristic {
            options.catch_all_heuristic = enabled;
        }
    }

    pub fn verify_options(&self) -> VerifyOptions {
        let mut options = VerifyOptions::default();
        self.apply_to(&mut options);
        options
    }

    pub fn disposable_domains(&self) -> DisposableDomains {
        let base = if self.disposable.replace_builtin {
            DisposableDomains::empty()
        } else {
            DisposableDomains::builtin()
        };
        base.with_domains(&self.disposable.extra_domains)
    }
}
