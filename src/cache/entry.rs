//! Cache Entry Module
//!
//! Defines a single cached payload and the expiry predicate shared by
//! lookups and the background reaper.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored response body tagged with the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw payload bytes, opaque to the cache
    pub value: Vec<u8>,
    /// Monotonic creation instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks the entry against `ttl` at the given instant.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        is_expired_at(self.created_at, now, ttl)
    }
}

// == Expiry Predicate ==
/// Returns true when an entry created at `created_at` is stale at `now`.
///
/// Boundary condition: the age must strictly exceed `ttl`. An entry that is
/// exactly `ttl` old is still served.
pub fn is_expired_at(created_at: Instant, now: Instant, ttl: Duration) -> bool {
    now.saturating_duration_since(created_at) > ttl
}
