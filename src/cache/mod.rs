//! Cache Module
//!
//! Time-expiring byte cache keyed by request URL, with lazy expiry on lookup
//! and a background reaper.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::{is_expired_at, CacheEntry};
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;
