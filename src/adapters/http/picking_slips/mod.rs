//! HTTP adapter for picking slip endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PickingSlipHandlers;
pub use routes::picking_slip_routes;
