//! Request DTOs for the cache server API
//!
//! Defines the query parameters accepted alongside raw payload bodies.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Query parameters for the SET operation (PUT /cache/:fingerprint)
///
/// # Fields
/// - `ttl`: Optional TTL in seconds (uses the server default if not specified)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetParams {
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetParams {
    /// Converts the relative TTL into the absolute expiration the store expects.
    ///
    /// Returns None if the TTL is too large to represent.
    pub fn expiration(&self, default_ttl: u64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let ttl = i64::try_from(self.ttl.unwrap_or(default_ttl)).ok()?;
        let ttl = Duration::try_seconds(ttl)?;
        now.checked_add_signed(ttl)
    }
}
