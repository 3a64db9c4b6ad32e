//! Fingerprint Cache - A capacity-bounded in-process cache
//!
//! Stores opaque byte payloads keyed by 64-bit fingerprints, with absolute
//! expiry and LRU, MRU, LFU or MFU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheEntry, EvictionPolicy, MemoryStore, Store};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
