//! Eviction Policy Module
//!
//! Picks the single victim to remove when the store is full.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;
use crate::error::CacheError;

// == Eviction Policy ==
/// Which entry to sacrifice when a new fingerprint arrives at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvictionPolicy {
    /// Least recently used: smallest `last_access`
    #[serde(rename = "LRU")]
    Lru,
    /// Most recently used: largest `last_access`
    #[serde(rename = "MRU")]
    Mru,
    /// Least frequently used: smallest `frequency`
    #[serde(rename = "LFU")]
    Lfu,
    /// Most frequently used: largest `frequency`
    #[serde(rename = "MFU")]
    Mfu,
}

impl EvictionPolicy {
    /// Returns the upper-case tag for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "LRU",
            EvictionPolicy::Mru => "MRU",
            EvictionPolicy::Lfu => "LFU",
            EvictionPolicy::Mfu => "MFU",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LRU" => Ok(EvictionPolicy::Lru),
            "MRU" => Ok(EvictionPolicy::Mru),
            "LFU" => Ok(EvictionPolicy::Lfu),
            "MFU" => Ok(EvictionPolicy::Mfu),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

// == Victim Selector ==
/// Single-pass scan that keeps the best eviction candidate seen so far.
///
/// LRU and LFU keep the first candidate on ties; MRU and MFU let a later
/// candidate with an equal score take over, so the last one seen wins.
#[derive(Debug)]
pub struct VictimSelector {
    policy: EvictionPolicy,
    best: Option<Candidate>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    key: u64,
    last_access: DateTime<Utc>,
    frequency: u64,
}

impl VictimSelector {
    /// Creates an empty selector for `policy`.
    pub fn new(policy: EvictionPolicy) -> Self {
        Self { policy, best: None }
    }

    /// Considers one entry as a possible victim.
    pub fn offer(&mut self, key: u64, entry: &CacheEntry) {
        let replace = match &self.best {
            None => true,
            Some(best) => match self.policy {
                EvictionPolicy::Lru => entry.last_access < best.last_access,
                EvictionPolicy::Mru => entry.last_access >= best.last_access,
                EvictionPolicy::Lfu => entry.frequency < best.frequency,
                EvictionPolicy::Mfu => entry.frequency >= best.frequency,
            },
        };

        if replace {
            self.best = Some(Candidate {
                key,
                last_access: entry.last_access,
                frequency: entry.frequency,
            });
        }
    }

    /// Returns the chosen victim, or None if nothing was offered.
    pub fn finish(self) -> Option<u64> {
        self.best.map(|candidate| candidate.key)
    }
}

/// Chooses exactly one victim from `entries` according to `policy`.
pub fn select_victim<'a, I>(policy: EvictionPolicy, entries: I) -> Option<u64>
where
    I: IntoIterator<Item = (u64, &'a CacheEntry)>,
{
    let mut selector = VictimSelector::new(policy);
    for (key, entry) in entries {
        selector.offer(key, entry);
    }
    selector.finish()
}
