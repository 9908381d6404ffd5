//! DNS MX resolution.
//!
//! [`resolve_with`] runs a bounded-time lookup through any [`LookupMx`]
//! implementation; [`SystemResolver`] is the trust-dns backed one used in
//! production.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, SystemResolver, resolve_with};
pub use types::{MxOrdering, MxRecord, MxStatus};

#[cfg(test)]
pub(crate) mod tests;
