//! Disposable (throwaway) mailbox providers.
//!
//! [`DisposableDomains`] is an immutable value built once and handed to the
//! [`Verifier`](crate::Verifier). The builtin list is compiled into a `phf`
//! set; configuration may extend or replace it.

use std::collections::HashSet;

use phf::phf_set;

static BUILTIN: phf::Set<&'static str> = phf_set! {
    "mailinator.com",
    "tempmail.com",
    "10minutemail.com",
    "guerrillamail.com",
    "throwawaymail.com",
    "yopmail.com",
    "trashmail.com",
    "sharklasers.com",
    "maildrop.cc",
    "dispostable.com",
    "getnada.com",
    "fakeinbox.com",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisposableDomains {
    builtin: bool,
    extra: HashSet<String>,
}

impl Default for DisposableDomains {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DisposableDomains {
    /// The compiled-in provider list.
    pub fn builtin() -> Self {
        Self {
            builtin: true,
            extra: HashSet::new(),
        }
    }

    /// No provider at all; every domain goes through DNS.
    pub fn empty() -> Self {
        Self {
            builtin: false,
            extra: HashSet::new(),
        }
    }

    /// Only the given domains, without the builtin list.
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_domains(domains)
    }

    /// Adds `domains` (case-normalized) to the set.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(
            domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty()),
        );
        self
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, domain: &str) -> bool {
        let lower = domain.to_lowercase();
        (self.builtin && BUILTIN.contains(lower.as_str())) || self.extra.contains(&lower)
    }

    pub fn len(&self) -> usize {
        let builtin = if self.builtin { BUILTIN.len() } else { 0 };
        builtin
            + self
                .extra
                .iter()
                .filter(|d| !(self.builtin && BUILTIN.contains(d.as_str())))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
