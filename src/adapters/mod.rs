//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - sqlx-backed reader implementations
//! - `http` - axum REST API exposure

pub mod http;
pub mod postgres;
