use std::time::Duration;

use crate::mx::MxOrdering;

pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const SMTP_PORT: u16 = 25;

/// Knobs of the [`Verifier`](super::Verifier) pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Upper bound of the MX lookup.
    pub dns_timeout: Duration,
    /// Upper bound of each TCP connect (first probe and catch-all probe).
    pub connect_timeout: Duration,
    pub smtp_port: u16,
    pub mx_ordering: MxOrdering,
    /// Run the second-connect catch-all heuristic after a successful probe.
    pub catch_all_heuristic: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            dns_timeout: DEFAULT_DNS_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            smtp_port: SMTP_PORT,
            mx_ordering: MxOrdering::Resolver,
            catch_all_heuristic: true,
        }
    }
}
