//! Cache Store Module
//!
//! Bounded in-process store: a fingerprint-to-record map behind a single
//! reader/writer lock, with policy-driven eviction and lazy expiry.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, StatsCounters, Store, VictimSelector};
use crate::error::{CacheError, Result};

// == Memory Store ==
/// In-process [`Store`] holding at most `capacity` encoded entries.
///
/// Every mutation, including the occupancy check, victim scan, victim removal
/// and insertion performed by a single `set`, runs under one write guard.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    capacity: usize,
    policy: EvictionPolicy,
    stats: StatsCounters,
}

#[derive(Debug)]
struct Inner {
    /// Encoded entries keyed by fingerprint
    records: HashMap<u64, Vec<u8>>,
    /// Most recent access timestamp handed out
    last_stamp: DateTime<Utc>,
}

impl Inner {
    /// Issues an access timestamp strictly greater than every earlier one,
    /// even if the wall clock stalls or steps backwards.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = if now > self.last_stamp {
            now
        } else {
            self.last_stamp + Duration::nanoseconds(1)
        };
        self.last_stamp = next;
        next
    }
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a store with the given capacity and eviction policy.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is not greater than 1.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        Self::builder().capacity(capacity).policy(policy).build()
    }

    /// Starts a [`MemoryStoreBuilder`].
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }

    /// Maximum number of entries held at rest.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Policy used to pick eviction victims.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    // == Length ==
    /// Returns the current number of records, live or not yet reclaimed.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    /// Decodes the entry for `key` without touching its metadata.
    ///
    /// Expired entries are returned as-is; corrupt records read as `None`.
    pub fn entry(&self, key: u64) -> Option<CacheEntry> {
        let inner = self.inner.read();
        let record = inner.records.get(&key)?;
        CacheEntry::decode(record).ok()
    }

    // == Cleanup Expired ==
    /// Removes every expired or undecodable record.
    ///
    /// Returns the number of records removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = Utc::now();
        let mut inner = self.inner.write();
        let before = inner.records.len();

        inner.records.retain(|_, record| match CacheEntry::decode(record) {
            Ok(entry) => !entry.is_expired_at(now),
            Err(_) => false,
        });

        let removed = before - inner.records.len();
        self.stats.record_expirations(removed as u64);
        removed
    }

    // == Evict ==
    /// Removes exactly one record chosen by the policy.
    ///
    /// A record that fails to decode is taken as the victim on sight.
    fn evict_one(&self, records: &mut HashMap<u64, Vec<u8>>) {
        let mut selector = VictimSelector::new(self.policy);
        let mut corrupt = None;

        for (&key, record) in records.iter() {
            match CacheEntry::decode(record) {
                Ok(entry) => selector.offer(key, &entry),
                Err(err) => {
                    warn!("Evicting corrupt record for fingerprint {}: {}", key, err);
                    corrupt = Some(key);
                    break;
                }
            }
        }

        if let Some(victim) = corrupt.or_else(|| selector.finish()) {
            records.remove(&victim);
            self.stats.record_eviction();
            debug!("Evicted fingerprint {} ({} policy)", victim, self.policy);
        }
    }
}

impl Store for MemoryStore {
    // == Get ==
    fn get(&self, key: u64) -> Option<Vec<u8>> {
        if !self.inner.read().records.contains_key(&key) {
            self.stats.record_miss();
            return None;
        }

        // The record may have changed between the two guards, so look again.
        let mut inner = self.inner.write();
        let Some(record) = inner.records.get(&key) else {
            self.stats.record_miss();
            return None;
        };

        let mut entry = match CacheEntry::decode(record) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Dropping corrupt record for fingerprint {}: {}", key, err);
                inner.records.remove(&key);
                self.stats.record_miss();
                return None;
            }
        };

        if entry.is_expired_at(Utc::now()) {
            inner.records.remove(&key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            debug!("Fingerprint {} expired at {}", key, entry.expiration);
            return None;
        }

        let now = inner.stamp();
        entry.touch(now);
        match entry.encode() {
            Ok(record) => {
                inner.records.insert(key, record);
            }
            Err(err) => error!("Failed to refresh metadata for fingerprint {}: {}", key, err),
        }

        self.stats.record_hit();
        Some(entry.value)
    }

    // == Set ==
    fn set(&self, key: u64, value: Vec<u8>, expiration: DateTime<Utc>) {
        let mut inner = self.inner.write();

        let now = inner.stamp();
        let record = match CacheEntry::new(value, expiration, now).encode() {
            Ok(record) => record,
            Err(err) => {
                error!("Dropping write for fingerprint {}: {}", key, err);
                return;
            }
        };

        // Overwrites never grow the map, so only new keys can trigger eviction.
        if !inner.records.contains_key(&key) && inner.records.len() >= self.capacity {
            self.evict_one(&mut inner.records);
        }

        inner.records.insert(key, record);
    }

    // == Release ==
    fn release(&self, key: u64) {
        if self.inner.write().records.remove(&key).is_some() {
            debug!("Released fingerprint {}", key);
        }
    }

    // == Purge ==
    fn purge(&self) {
        let mut inner = self.inner.write();
        let cleared = inner.records.len();
        inner.records.clear();
        info!("Purged {} entries", cleared);
    }
}

// == Builder ==
/// Builder for [`MemoryStore`].
///
/// # Example
///
/// ```ignore
/// use fingerprint_cache::cache::{EvictionPolicy, MemoryStore};
///
/// let store = MemoryStore::builder()
///     .capacity(1024)
///     .policy(EvictionPolicy::Lfu)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    capacity: Option<usize>,
    policy: Option<EvictionPolicy>,
}

impl MemoryStoreBuilder {
    /// Set the maximum number of entries. Must be greater than 1.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the eviction policy.
    pub fn policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set the eviction policy from its tag (`LRU`, `MRU`, `LFU`, `MFU`).
    ///
    /// # Errors
    /// Returns [`CacheError::UnknownPolicy`] for any other tag.
    pub fn policy_name(self, tag: &str) -> Result<Self> {
        Ok(self.policy(tag.parse()?))
    }

    /// Build the store with the configured settings.
    pub fn build(self) -> Result<MemoryStore> {
        let capacity = self.capacity.unwrap_or(0);
        if capacity <= 1 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        let policy = self.policy.ok_or(CacheError::MissingPolicy)?;

        Ok(MemoryStore {
            inner: RwLock::new(Inner {
                records: HashMap::with_capacity(capacity),
                last_stamp: DateTime::<Utc>::MIN_UTC,
            }),
            capacity,
            policy,
            stats: StatsCounters::new(),
        })
    }
}
