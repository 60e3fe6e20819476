//! Hanpoom Warehouse Management System backend.
//!
//! Exposes the picking slip listing read path: lifecycle status
//! classification, pre-order aggregation, and paginated queries over the
//! warehouse store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
