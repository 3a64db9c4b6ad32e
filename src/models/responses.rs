//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing JSON response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheStats, EvictionPolicy};

/// Response body for the SET operation (PUT /cache/:fingerprint)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The fingerprint that was set
    pub fingerprint: u64,
    /// Absolute expiration, RFC 3339
    pub expires_at: DateTime<Utc>,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(fingerprint: u64, expires_at: DateTime<Utc>) -> Self {
        Self {
            message: format!("Fingerprint {} stored", fingerprint),
            fingerprint,
            expires_at,
        }
    }
}

/// Response body for the DELETE operation (DELETE /cache/:fingerprint)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The fingerprint that was released
    pub fingerprint: u64,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(fingerprint: u64) -> Self {
        Self {
            message: format!("Fingerprint {} released", fingerprint),
            fingerprint,
        }
    }
}

/// Response body for the purge operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    /// Success message
    pub message: String,
}

impl PurgeResponse {
    pub fn new() -> Self {
        Self {
            message: "Cache purged".to_string(),
        }
    }
}

impl Default for PurgeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of expired entries removed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Active eviction policy
    pub policy: EvictionPolicy,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            capacity,
            policy,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
