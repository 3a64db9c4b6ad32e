//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /cache/:fingerprint` - Store a raw payload
//! - `GET /cache/:fingerprint` - Retrieve a raw payload
//! - `DELETE /cache/:fingerprint` - Release one fingerprint
//! - `DELETE /cache` - Purge every entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
