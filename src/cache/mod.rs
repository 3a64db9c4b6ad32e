//! Cache Module
//!
//! Fingerprint-keyed storage for opaque payloads with expiry and a pluggable
//! eviction policy.

mod backend;
mod entry;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use backend::Store;
pub use entry::CacheEntry;
pub use policy::{select_victim, EvictionPolicy, VictimSelector};
pub use stats::{CacheStats, StatsCounters};
pub use store::{MemoryStore, MemoryStoreBuilder};

// == Public Constants ==
/// Maximum payload size accepted over HTTP
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
