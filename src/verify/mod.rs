//! The verification pipeline.
//!
//! [`Verifier::verify`] runs, in order: syntax, disposable-domain lookup, MX
//! resolution, SMTP port probe (plus the catch-all heuristic). Each stage
//! either lets the next one run or ends the evaluation; no stage can undo
//! what an earlier one recorded.

mod options;
mod types;

pub use options::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_DNS_TIMEOUT, SMTP_PORT, VerifyOptions};
pub use types::{SmtpState, Status, VerificationResult};

use std::ops::ControlFlow::{self, Break, Continue};

use tracing::{debug, instrument, warn};

use crate::disposable::DisposableDomains;
use crate::error::VerifyError;
use crate::mx::{LookupMx, SystemResolver, resolve_with};
use crate::probe::{Dial, TcpDialer, is_likely_catch_all, probe_host};
use crate::syntax::parse_mailbox;
use types::Evaluation;

/// Verifies email addresses. Holds only immutable state; share it behind an
/// `Arc` to serve concurrent calls.
pub struct Verifier<R = SystemResolver, D = TcpDialer> {
    resolver: R,
    dialer: D,
    disposable: DisposableDomains,
    options: VerifyOptions,
}

impl Verifier {
    /// System DNS configuration, plain TCP, builtin disposable list.
    pub fn from_system_conf(options: VerifyOptions) -> Result<Self, VerifyError> {
        let resolver = SystemResolver::from_system_conf(options.dns_timeout)?;
        Ok(Self::new(resolver, TcpDialer, options))
    }
}

impl<R, D> Verifier<R, D>
where
    R: LookupMx,
    D: Dial,
{
    pub fn new(resolver: R, dialer: D, options: VerifyOptions) -> Self {
        Self {
            resolver,
            dialer,
            disposable: DisposableDomains::default(),
            options,
        }
    }

    pub fn with_disposable(mut self, disposable: DisposableDomains) -> Self {
        self.disposable = disposable;
        self
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    pub fn disposable(&self) -> &DisposableDomains {
        &self.disposable
    }

    /// Runs the whole pipeline for `email`. Never fails: every problem ends
    /// up as a field of the returned result.
    #[instrument(level = "debug", skip_all, fields(email = %email))]
    pub async fn verify(&self, email: &str) -> VerificationResult {
        let mut eval = Evaluation::new(email);
        let _ = self.run(email, &mut eval).await;
        let result = eval.finish();
        debug!(
            status = %result.status,
            smtp = %result.smtp_state,
            "verification finished"
        );
        result
    }

    async fn run(&self, email: &str, eval: &mut Evaluation) -> ControlFlow<()> {
        let domain = check_syntax(email, eval)?;
        self.check_disposable(&domain, eval)?;
        let host = self.resolve_mail_host(&domain, eval).await?;
        self.probe_smtp(&host, eval).await?;
        eval.promote_deliverable();
        Continue(())
    }

    fn check_disposable(&self, domain: &str, eval: &mut Evaluation) -> ControlFlow<()> {
        if !self.disposable.contains(domain) {
            return Continue(());
        }
        debug!(domain, "disposable domain");
        eval.confirm_mail_domain();
        eval.set_smtp_state(SmtpState::Disposable);
        eval.mark_risky();
        Break(())
    }

    /// Returns the host of the first MX record, root dot stripped.
    async fn resolve_mail_host(
        &self,
        domain: &str,
        eval: &mut Evaluation,
    ) -> ControlFlow<(), String> {
        let lookup = resolve_with(
            &self.resolver,
            domain,
            self.options.dns_timeout,
            self.options.mx_ordering,
        )
        .await;

        let status = match lookup {
            Ok(status) => status,
            Err(err) if err.is_timeout() => {
                warn!(domain, error = %err, "MX lookup timed out");
                return Break(());
            }
            Err(err) => {
                debug!(domain, error = %err, "MX lookup failed");
                return Break(());
            }
        };

        let Some(record) = status.first() else {
            debug!(domain, "no MX records");
            return Break(());
        };
        eval.confirm_mail_domain();
        debug!(
            domain,
            exchange = %record.exchange,
            preference = record.preference,
            records = status.records().len(),
            "MX resolved"
        );
        Continue(record.exchange.trim_end_matches('.').to_string())
    }

    async fn probe_smtp(&self, host: &str, eval: &mut Evaluation) -> ControlFlow<()> {
        let port = self.options.smtp_port;
        let timeout = self.options.connect_timeout;

        // held open until the catch-all probe is done
        let _first = match probe_host(&self.dialer, host, port, timeout).await {
            Ok(connection) => connection,
            Err(err) => {
                if err.is_timeout() {
                    warn!(host, port, error = %err, "SMTP probe timed out");
                } else {
                    debug!(host, port, error = %err, "SMTP probe failed");
                }
                eval.set_smtp_state(SmtpState::Unreachable);
                return Break(());
            }
        };
        eval.set_smtp_state(SmtpState::Reachable);

        if self.options.catch_all_heuristic
            && is_likely_catch_all(&self.dialer, host, port, timeout).await
        {
            debug!(host, "host accepted a second connection, flagging catch-all");
            eval.set_smtp_state(SmtpState::ReachableCatchAll);
            eval.mark_risky();
            return Break(());
        }
        Continue(())
    }
}

/// Syntax stage. Yields the lower-cased domain.
fn check_syntax(email: &str, eval: &mut Evaluation) -> ControlFlow<(), String> {
    if let Err(err) = parse_mailbox(email) {
        debug!(error = %err, "syntax check failed");
        return Break(());
    }
    eval.mark_syntax_valid();

    // a quoted local part may hold '@'; such addresses stop here
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        debug!(parts = parts.len(), "address does not split into local@domain");
        return Break(());
    }
    Continue(parts[1].to_lowercase())
}

/// One-shot verification with the system resolver and default options.
pub async fn verify_email(email: &str) -> Result<VerificationResult, VerifyError> {
    let verifier = Verifier::from_system_conf(VerifyOptions::default())?;
    Ok(verifier.verify(email).await)
}
