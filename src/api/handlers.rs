//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::cache::{MemoryStore, Store, MAX_VALUE_SIZE};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteResponse, HealthResponse, PurgeResponse, SetParams, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The store does its own locking, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared bounded store
    pub store: Arc<MemoryStore>,
    /// TTL in seconds applied when a PUT carries none
    pub default_ttl: u64,
}

impl AppState {
    /// Creates a new AppState around an existing store.
    pub fn new(store: MemoryStore, default_ttl: u64) -> Self {
        Self {
            store: Arc::new(store),
            default_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails if the configured capacity or eviction policy is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = MemoryStore::builder()
            .capacity(config.capacity)
            .policy_name(&config.eviction_policy)?
            .build()?;
        Ok(Self::new(store, config.default_ttl))
    }
}

/// Handler for PUT /cache/:fingerprint
///
/// Stores the raw request body under the fingerprint, expiring after `ttl`
/// seconds (or the server default).
pub async fn set_handler(
    State(state): State<AppState>,
    Path(fingerprint): Path<u64>,
    Query(params): Query<SetParams>,
    body: Bytes,
) -> Result<Json<SetResponse>> {
    if body.len() > MAX_VALUE_SIZE {
        return Err(CacheError::InvalidRequest(format!(
            "Value exceeds maximum size of {} bytes",
            MAX_VALUE_SIZE
        )));
    }

    let expires_at = params
        .expiration(state.default_ttl, Utc::now())
        .ok_or_else(|| CacheError::InvalidRequest("TTL is out of range".to_string()))?;

    state.store.set(fingerprint, body.to_vec(), expires_at);

    Ok(Json(SetResponse::new(fingerprint, expires_at)))
}

/// Handler for GET /cache/:fingerprint
///
/// Returns the raw payload, or 404 if it is absent or expired.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(fingerprint): Path<u64>,
) -> Result<Response> {
    let value = state
        .store
        .get(fingerprint)
        .ok_or(CacheError::NotFound(fingerprint))?;

    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], value).into_response())
}

/// Handler for DELETE /cache/:fingerprint
///
/// Releasing an absent fingerprint is not an error.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(fingerprint): Path<u64>,
) -> Json<DeleteResponse> {
    state.store.release(fingerprint);
    Json(DeleteResponse::new(fingerprint))
}

/// Handler for DELETE /cache
pub async fn purge_handler(State(state): State<AppState>) -> Json<PurgeResponse> {
    state.store.purge();
    Json(PurgeResponse::new())
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.store.stats();
    Json(StatsResponse::new(
        &stats,
        state.store.capacity(),
        state.store.policy(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
