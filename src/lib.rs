#![forbid(unsafe_code)]
//! mailverify_lib: vérification de délivrabilité e-mail
//! (syntaxe, domaine jetable, MX, port SMTP).

pub mod disposable;
mod error;
pub mod logging;
pub mod mx;
pub mod probe;
pub mod syntax;
pub mod verify;

#[cfg(feature = "with-serde")]
pub mod config;

#[cfg(feature = "with-api")]
pub mod api;

pub use disposable::DisposableDomains;
pub use error::VerifyError;
pub use logging::{LogFormat, init_logging};
pub use mx::{Error as MxError, LookupMx, MxOrdering, MxRecord, MxStatus, SystemResolver};
pub use probe::{Connection, Dial, ProbeError, TcpDialer};
pub use syntax::{Mailbox, SyntaxError, parse_mailbox};
pub use verify::{SmtpState, Status, VerificationResult, Verifier, VerifyOptions, verify_email};

#[cfg(feature = "with-serde")]
pub use config::{ConfigError, ConfigFile};
