//! HTTP adapters - REST API implementations.

pub mod picking_slips;

pub use picking_slips::{picking_slip_routes, PickingSlipHandlers};
