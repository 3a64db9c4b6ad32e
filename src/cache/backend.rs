//! Store Interface
//!
//! The contract every cache backend satisfies, whether it keeps records in
//! process memory or forwards them to a remote key-value service.

use chrono::{DateTime, Utc};

/// Capability set shared by all backends.
///
/// Keys are caller-computed fingerprints; the backend treats them as opaque
/// unique identifiers. None of these operations report errors: a miss is
/// `None`, and a backend that cannot complete a write drops it.
pub trait Store: Send + Sync {
    /// Returns a copy of the live value for `key`, refreshing its access
    /// metadata. Expired entries are removed and reported as a miss.
    fn get(&self, key: u64) -> Option<Vec<u8>>;

    /// Inserts or overwrites `key`, evicting one entry first if a new key
    /// would exceed capacity.
    fn set(&self, key: u64, value: Vec<u8>, expiration: DateTime<Utc>);

    /// Removes `key` if present.
    fn release(&self, key: u64);

    /// Removes every entry.
    fn purge(&self);
}
