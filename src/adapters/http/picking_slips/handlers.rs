//! HTTP handlers for picking slip endpoints.
//!
//! Request validation lives here: the status filter must parse into the
//! closed set, and `page`/`limit` must be positive integers. The query
//! handler behind the facade assumes valid typed input.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{ListPickingSlipsHandler, ListPickingSlipsQuery};
use crate::domain::status::PickingSlipStatus;

use super::dto::{ErrorResponse, ListPickingSlipsParams, PickingSlipListResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PickingSlipHandlers {
    list_handler: Arc<ListPickingSlipsHandler>,
}

impl PickingSlipHandlers {
    pub fn new(list_handler: Arc<ListPickingSlipsHandler>) -> Self {
        Self { list_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /picking-slips - list picking slips with pagination and optional
/// status filtering
pub async fn list_picking_slips(
    State(handlers): State<PickingSlipHandlers>,
    Query(params): Query<ListPickingSlipsParams>,
) -> Response {
    let status = match params.status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<PickingSlipStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                return bad_request(
                    "status must be one of \"not printed\", \"printed\", \"held\"",
                )
            }
        },
    };

    let page = match positive_param(params.page, ListPickingSlipsQuery::DEFAULT_PAGE, "page") {
        Ok(page) => page,
        Err(response) => return response,
    };
    let limit = match positive_param(params.limit, ListPickingSlipsQuery::DEFAULT_LIMIT, "limit") {
        Ok(limit) => limit,
        Err(response) => return response,
    };

    let query = ListPickingSlipsQuery {
        status,
        page,
        limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(list) => {
            let response: PickingSlipListResponse = list.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list picking slips: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to list picking slips")),
            )
                .into_response()
        }
    }
}

fn positive_param(value: Option<i64>, default: u32, name: &str) -> Result<u32, Response> {
    match value {
        None => Ok(default),
        Some(v) if v >= 1 && v <= i64::from(u32::MAX) => Ok(v as u32),
        Some(_) => Err(bad_request(format!("{name} must be a positive integer"))),
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}
