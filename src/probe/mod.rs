//! SMTP port reachability, without speaking SMTP.
//!
//! [`probe_host`] opens one TCP connection to `<host>:<port>` within a fixed
//! time budget. [`is_likely_catch_all`] repeats that connect; a second
//! success is taken as a (weak) sign the host accepts anything.

mod dialer;
mod error;

pub use dialer::{Connection, Dial, TcpDialer};
pub use error::ProbeError;

use std::time::Duration;

use tracing::debug;

/// Connects to `host:port`, bounded by `timeout`. The returned
/// [`Connection`] closes its socket when dropped.
pub async fn probe_host<D>(
    dialer: &D,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<Connection, ProbeError>
where
    D: Dial + ?Sized,
{
    match tokio::time::timeout(timeout, dialer.dial(host, port)).await {
        Ok(Ok(connection)) => Ok(connection),
        Ok(Err(source)) => Err(ProbeError::connect(host, port, source)),
        Err(_) => Err(ProbeError::timeout(host, port, timeout)),
    }
}

/// Catch-all heuristic: a second connect to the same host.
///
/// Only the connection is tested, no `MAIL FROM`/`RCPT TO` is ever sent, so
/// nearly every reachable host passes. Callers should treat a `true` as a
/// hint, not as evidence.
pub async fn is_likely_catch_all<D>(dialer: &D, host: &str, port: u16, timeout: Duration) -> bool
where
    D: Dial + ?Sized,
{
    match probe_host(dialer, host, port, timeout).await {
        Ok(_connection) => true,
        Err(err) => {
            debug!(error = %err, "catch-all probe failed");
            false
        }
    }
}
