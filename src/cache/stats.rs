//! Cache Statistics Module
//!
//! Counts lookups and removals. Purely observational.

use serde::Serialize;

// == Cache Stats ==
/// Lookup and expiry counters for an expiring cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Retrievals that returned a payload
    pub hits: u64,
    /// Retrievals that returned nothing (absent or stale)
    pub misses: u64,
    /// Entries removed lazily because a retrieval found them stale
    pub expired: u64,
    /// Entries removed by reaper sweeps
    pub reaped: u64,
    /// Current number of entries in the mapping
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Counts a stale entry dropped on lookup.
    pub fn record_expired(&mut self) {
        self.expired += 1;
    }

    /// Adds the number of entries one sweep removed.
    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
