//! Cache Entry Module
//!
//! Defines the logical cache entry and the codec that turns it into the
//! opaque byte record held by every backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Cache Entry ==
/// A cached payload together with its expiry and access metadata.
///
/// The metadata travels inside the encoded record, so a backend that only
/// stores byte blobs can still run every eviction policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached payload
    pub value: Vec<u8>,
    /// Absolute time after which the entry is dead
    pub expiration: DateTime<Utc>,
    /// Time of the most recent successful read (or of creation)
    pub last_access: DateTime<Utc>,
    /// Number of successful reads since creation, starting at one
    pub frequency: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a fresh entry, counting its creation as the first access.
    ///
    /// # Arguments
    /// * `value` - The payload to store
    /// * `expiration` - Absolute expiration time
    /// * `now` - Creation time, recorded as the last access
    pub fn new(value: Vec<u8>, expiration: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            value,
            expiration,
            last_access: now,
            frequency: 1,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is dead at `now`.
    ///
    /// An entry stays live only while its expiration is strictly after `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }

    /// Checks whether the entry is dead at the current wall-clock time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    // == Touch ==
    /// Records a successful read at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_access = now;
        self.frequency = self.frequency.saturating_add(1);
    }

    // == Codec ==
    /// Serializes the entry, all four fields included, into a byte record.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(CacheError::Encode)
    }

    /// Parses a byte record produced by [`CacheEntry::encode`].
    ///
    /// Truncated or malformed input is an error, never a zero-valued entry.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(CacheError::Decode)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_entry() -> CacheEntry {
        let now = Utc::now();
        CacheEntry::new(b"HTTP/1.1 200 OK".to_vec(), now + Duration::hours(1), now)
    }

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = CacheEntry::new(b"payload".to_vec(), now + Duration::seconds(60), now);

        assert_eq!(entry.value, b"payload");
        assert_eq!(entry.frequency, 1);
        assert_eq!(entry.last_access, now);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expired_in_past() {
        let now = Utc::now();
        let entry = CacheEntry::new(b"stale".to_vec(), now - Duration::seconds(1), now);

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = CacheEntry::new(b"edge".to_vec(), now, now);

        // Expiration equal to the current time is already dead
        assert!(entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now - Duration::nanoseconds(1)));
    }

    #[test]
    fn test_touch_updates_metadata() {
        let mut entry = sample_entry();
        let later = entry.last_access + Duration::milliseconds(5);

        entry.touch(later);

        assert_eq!(entry.last_access, later);
        assert_eq!(entry.frequency, 2);
    }

    #[test]
    fn test_touch_saturates_frequency() {
        let mut entry = sample_entry();
        entry.frequency = u64::MAX;

        entry.touch(Utc::now());

        assert_eq!(entry.frequency, u64::MAX);
    }

    #[test]
    fn test_encode_decode_preserves_all_fields() {
        let mut entry = sample_entry();
        entry.frequency = 17;

        let bytes = entry.encode().unwrap();
        let decoded = CacheEntry::decode(&bytes).unwrap();

        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(matches!(CacheEntry::decode(&[]), Err(CacheError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_input_fails() {
        let bytes = sample_entry().encode().unwrap();
        let truncated = &bytes[..bytes.len() - 3];

        assert!(matches!(
            CacheEntry::decode(truncated),
            Err(CacheError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let garbage = [0xffu8; 8];
        assert!(CacheEntry::decode(&garbage).is_err());
    }
}
