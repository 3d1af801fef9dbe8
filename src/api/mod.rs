//! API Module
//!
//! Local HTTP front end that lets several processes share one cache.
//!
//! # Endpoints
//! - `PUT /cache?key=<url>` - Store the raw request body under `key`
//! - `GET /cache?key=<url>` - Retrieve the raw payload stored under `key`
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
