//! Application layer - queries and their handlers.
//!
//! Orchestrates domain operations over ports. This service is read-only, so
//! the layer holds query handlers exclusively.

pub mod handlers;

pub use handlers::{ListPickingSlipsHandler, ListPickingSlipsQuery, PickingSlipList};
