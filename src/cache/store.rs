//! Cache Store Module
//!
//! The bare mapping behind an expiring cache. Not synchronized on its own;
//! `ExpiringCache` wraps it in a single mutex.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to payload mapping with a single, fixed time-to-live.
#[derive(Debug)]
pub struct CacheStore {
    /// Keyed payloads
    entries: HashMap<String, CacheEntry>,
    /// Lookup counters
    stats: CacheStats,
    /// Freshness window shared by every entry
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Set ==
    /// Inserts or replaces the payload for `key`.
    ///
    /// Replacing an existing key resets its age to zero.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload for `key` if present and fresh.
    ///
    /// A stale entry is removed before returning `None`, so repeated lookups
    /// keep missing until the key is stored again. Reading never extends an
    /// entry's life.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let now = Instant::now();

        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired_at(now, self.ttl),
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expired();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            debug!(key, "dropped stale entry on lookup");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Cleanup Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of entries in the mapping, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
