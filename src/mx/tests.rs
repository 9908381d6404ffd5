use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use trust_dns_resolver::error::ResolveError;

use super::resolver::{self, LookupMx};
use super::{Error, MxOrdering, MxRecord, MxStatus};

type LookupResult = Result<Vec<MxRecord>, Error>;
type LookupFn = dyn Fn(&str) -> LookupResult + Send + Sync;

/// Answers from a closure and counts the queries it received.
pub(crate) struct StubResolver {
    on_lookup: Box<LookupFn>,
    pub calls: Arc<AtomicUsize>,
}

impl StubResolver {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + Send + Sync + 'static,
    {
        Self {
            on_lookup: Box::new(f),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn records(records: Vec<MxRecord>) -> Self {
        Self::new(move |_| Ok(records.clone()))
    }

    pub(crate) fn failing(message: &'static str) -> Self {
        Self::new(move |_| Err(Error::lookup(ResolveError::from(message))))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupMx for StubResolver {
    async fn lookup_mx(&self, domain: &str) -> LookupResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.on_lookup)(domain)
    }
}

/// Never answers.
pub(crate) struct SilentResolver;

#[async_trait]
impl LookupMx for SilentResolver {
    async fn lookup_mx(&self, _domain: &str) -> LookupResult {
        std::future::pending().await
    }
}

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn normalize_domain_rejects_empty() {
    let err = resolver::normalize_domain("").expect_err("empty domain should fail");
    assert!(matches!(err, Error::EmptyDomain));
}

#[test]
fn normalize_domain_converts_idna() {
    let ascii = resolver::normalize_domain("exämple.com").expect("idna");
    assert_eq!(ascii, "xn--exmple-cua.com");
}

#[tokio::test]
async fn resolve_with_keeps_resolver_order_by_default() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
        ])
    });

    let status = resolver::resolve_with(&stub, "example.com", TIMEOUT, MxOrdering::Resolver)
        .await
        .expect("lookup succeeds");
    assert_eq!(status.first().map(|r| r.exchange.as_str()), Some("mx2.example.com"));
}

#[tokio::test]
async fn resolve_with_sorts_and_dedups_records() {
    let stub = StubResolver::records(vec![
        MxRecord::new(20, "mx2.example.com"),
        MxRecord::new(10, "mx1.example.com"),
        MxRecord::new(10, "mx1.example.com"),
        MxRecord::new(30, "mx3.example.com"),
    ]);

    let status = resolver::resolve_with(&stub, "example.com", TIMEOUT, MxOrdering::Preference)
        .await
        .expect("lookup succeeds");
    let records = match status {
        MxStatus::Records(records) => records,
        MxStatus::NoRecords => panic!("expected records"),
    };
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].preference, 10);
    assert_eq!(records[0].exchange, "mx1.example.com");
    assert_eq!(records[2].preference, 30);
}

#[tokio::test]
async fn resolve_with_handles_no_records() {
    let stub = StubResolver::records(Vec::new());
    let status = resolver::resolve_with(&stub, "example.com", TIMEOUT, MxOrdering::Resolver)
        .await
        .expect("lookup succeeds");
    assert!(matches!(status, MxStatus::NoRecords));
}

#[tokio::test]
async fn resolve_with_passes_lookup_errors_through() {
    let stub = StubResolver::failing("SERVFAIL");
    let err = resolver::resolve_with(&stub, "example.com", TIMEOUT, MxOrdering::Resolver)
        .await
        .expect_err("lookup fails");
    assert!(matches!(err, Error::Lookup { .. }));
}

#[tokio::test]
async fn resolve_with_queries_lowercase_ascii() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(Vec::new())
    });
    resolver::resolve_with(&stub, "Example.COM", TIMEOUT, MxOrdering::Resolver)
        .await
        .expect("lookup succeeds");
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn resolve_with_times_out_on_silent_resolver() {
    let started = tokio::time::Instant::now();
    let err = resolver::resolve_with(&SilentResolver, "example.com", TIMEOUT, MxOrdering::Resolver)
        .await
        .expect_err("must time out");
    assert!(err.is_timeout());
    assert!(started.elapsed() >= TIMEOUT);
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = resolver::normalize_exchange("Mail.EXAMPLE.com.".to_string());
    assert_eq!(out, "mail.example.com");
}

#[test]
fn resolver_timeout_is_reported_as_timeout() {
    let err = ResolveError::from(trust_dns_resolver::error::ResolveErrorKind::Timeout);
    let err = resolver::classify_lookup_error("example.com", TIMEOUT, err)
        .expect_err("timeout is an error");
    assert!(err.is_timeout());
    assert!(matches!(err, Error::Timeout { ref domain, after } if domain == "example.com" && after == TIMEOUT));
}

#[test]
fn other_resolver_errors_stay_lookup_errors() {
    let err = resolver::classify_lookup_error("example.com", TIMEOUT, ResolveError::from("SERVFAIL"))
        .expect_err("lookup error");
    assert!(matches!(err, Error::Lookup { .. }));
    assert!(!err.is_timeout());
}
