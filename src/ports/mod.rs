//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod picking_slip_reader;

pub use picking_slip_reader::{PickingSlipReader, PickingSlipSummary, SlipReadError};
