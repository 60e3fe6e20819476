//! HTTP routes for picking slip endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_picking_slips, PickingSlipHandlers};

/// Creates the picking slip router.
pub fn picking_slip_routes(handlers: PickingSlipHandlers) -> Router {
    Router::new()
        .route("/", get(list_picking_slips))
        .with_state(handlers)
}
