//! Pokecache - A time-expiring response cache
//!
//! Stores raw response bodies keyed by request URL, serves them back within a
//! fixed TTL and sweeps stale entries in the background.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ExpiringCache;
pub use config::Config;
