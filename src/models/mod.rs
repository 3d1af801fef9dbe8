//! Request and Response models for the cache HTTP front end
//!
//! Payloads travel as raw bytes; only metadata is JSON.

pub mod requests;
pub mod responses;

pub use requests::KeyQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse, StoreResponse};
