//! Error types for the fingerprint cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity missing or not greater than one
    #[error("capacity must be greater than 1, got {0}")]
    InvalidCapacity(usize),

    /// No eviction policy was configured
    #[error("eviction policy is not set")]
    MissingPolicy,

    /// Eviction policy tag not recognized
    #[error("unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Stored record could not be decoded
    #[error("failed to decode cache entry: {0}")]
    Decode(#[source] bincode::Error),

    /// Entry could not be encoded
    #[error("failed to encode cache entry: {0}")]
    Encode(#[source] bincode::Error),

    /// Fingerprint not present or expired
    #[error("fingerprint not found: {0}")]
    NotFound(u64),

    /// Invalid request data
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_)
            | CacheError::InvalidCapacity(_)
            | CacheError::MissingPolicy
            | CacheError::UnknownPolicy(_) => StatusCode::BAD_REQUEST,
            CacheError::Decode(_) | CacheError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CacheError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_config_errors_map_to_400() {
        let response = CacheError::InvalidCapacity(1).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = CacheError::UnknownPolicy("FIFO".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(0).to_string(),
            "capacity must be greater than 1, got 0"
        );
        assert_eq!(CacheError::NotFound(7).to_string(), "fingerprint not found: 7");
    }
}
