use std::time::Duration;

use async_trait::async_trait;
use trust_dns_resolver::TokioAsyncResolver;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::system_conf::read_system_conf;

use super::{Error, MxOrdering, MxRecord, MxStatus};

/// Capability to look up the MX records of an ASCII domain.
#[async_trait]
pub trait LookupMx: Send + Sync {
    /// An `Ok` empty list means the domain exists but publishes no MX.
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error>;
}

/// System-configured resolver (`/etc/resolv.conf` on Unix), one attempt per
/// query.
pub struct SystemResolver {
    inner: TokioAsyncResolver,
    timeout: Duration,
}

impl SystemResolver {
    pub fn from_system_conf(timeout: Duration) -> Result<Self, Error> {
        let (config, mut opts) = read_system_conf().map_err(Error::resolver_init)?;
        opts.timeout = timeout;
        opts.attempts = 1;
        Ok(Self {
            inner: TokioAsyncResolver::tokio(config, opts),
            timeout,
        })
    }
}

#[async_trait]
impl LookupMx for SystemResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        match self.inner.mx_lookup(domain).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
                .collect()),
            Err(err) => classify_lookup_error(domain, self.timeout, err),
        }
    }
}

/// No-records answers are an empty list; the resolver's own timeout is
/// reported like the outer one.
pub(crate) fn classify_lookup_error(
    domain: &str,
    timeout: Duration,
    err: ResolveError,
) -> Result<Vec<MxRecord>, Error> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Ok(Vec::new()),
        ResolveErrorKind::Timeout => Err(Error::timeout(domain, timeout)),
        _ => Err(Error::lookup(err)),
    }
}

/// Normalizes `domain` via IDNA and queries `resolver`, giving up after
/// `timeout` whatever the resolver does.
pub async fn resolve_with<R>(
    resolver: &R,
    domain: &str,
    timeout: Duration,
    ordering: MxOrdering,
) -> Result<MxStatus, Error>
where
    R: LookupMx + ?Sized,
{
    let ascii = normalize_domain(domain)?;
    let mut records = tokio::time::timeout(timeout, resolver.lookup_mx(&ascii))
        .await
        .map_err(|_| Error::timeout(&ascii, timeout))??;

    if ordering == MxOrdering::Preference {
        records.sort();
        records.dedup();
    }

    if records.is_empty() {
        Ok(MxStatus::NoRecords)
    } else {
        Ok(MxStatus::Records(records))
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}
