//! HTTP DTOs for picking slip endpoints.
//!
//! These types decouple the HTTP API from domain types. Listing rows keep
//! snake_case keys while pagination metadata uses camelCase, matching the
//! envelope frontend consumers already parse.

use serde::{Deserialize, Serialize};

use crate::application::PickingSlipList;
use crate::domain::status::PickingSlipStatus;
use crate::ports::PickingSlipSummary;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for listing picking slips.
///
/// `page` and `limit` arrive as signed integers so non-positive values reach
/// the handler's validation instead of failing opaquely at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPickingSlipsParams {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One row of the listing payload.
#[derive(Debug, Clone, Serialize)]
pub struct PickingSlipRow {
    pub order_id: Option<i64>,
    pub picking_slip_id: i64,
    pub picking_slip_status: PickingSlipStatus,
    pub has_pre_order_item: bool,
}

impl From<PickingSlipSummary> for PickingSlipRow {
    fn from(summary: PickingSlipSummary) -> Self {
        Self {
            order_id: summary.order_id,
            picking_slip_id: summary.picking_slip_id,
            picking_slip_status: summary.status,
            has_pre_order_item: summary.has_pre_order_item,
        }
    }
}

/// Pagination metadata for the listing envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub items_per_page: u32,
    pub total_items: u64,
    pub current_page: u32,
    pub total_pages: u64,
    pub filter: ListFilter,
}

/// The filter the listing was computed under; `status` is null when the
/// request had none.
#[derive(Debug, Clone, Serialize)]
pub struct ListFilter {
    pub status: Option<PickingSlipStatus>,
}

/// Response envelope for the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PickingSlipListResponse {
    pub data: Vec<PickingSlipRow>,
    pub meta: ListMeta,
}

impl From<PickingSlipList> for PickingSlipListResponse {
    fn from(list: PickingSlipList) -> Self {
        Self {
            data: list.items.into_iter().map(Into::into).collect(),
            meta: ListMeta {
                items_per_page: list.items_per_page,
                total_items: list.total_items,
                current_page: list.current_page,
                total_pages: list.total_pages,
                filter: ListFilter {
                    status: list.filter,
                },
            },
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> PickingSlipList {
        PickingSlipList {
            items: vec![
                PickingSlipSummary {
                    order_id: Some(18),
                    picking_slip_id: 19,
                    status: PickingSlipStatus::Printed,
                    has_pre_order_item: false,
                },
                PickingSlipSummary {
                    order_id: None,
                    picking_slip_id: 20,
                    status: PickingSlipStatus::Held,
                    has_pre_order_item: true,
                },
            ],
            items_per_page: 10,
            total_items: 1322,
            current_page: 1,
            total_pages: 133,
            filter: None,
        }
    }

    #[test]
    fn params_deserialize_with_all_fields_absent() {
        let params: ListPickingSlipsParams = serde_json::from_str("{}").unwrap();
        assert!(params.limit.is_none());
        assert!(params.page.is_none());
        assert!(params.status.is_none());
    }

    #[test]
    fn params_accept_negative_numbers_for_later_validation() {
        let params: ListPickingSlipsParams =
            serde_json::from_str(r#"{"limit": -5, "page": 0}"#).unwrap();
        assert_eq!(params.limit, Some(-5));
        assert_eq!(params.page, Some(0));
    }

    #[test]
    fn data_rows_keep_snake_case_keys() {
        let response = PickingSlipListResponse::from(sample_list());
        let json = serde_json::to_value(&response).unwrap();

        let first = &json["data"][0];
        assert_eq!(first["order_id"], 18);
        assert_eq!(first["picking_slip_id"], 19);
        assert_eq!(first["picking_slip_status"], "printed");
        assert_eq!(first["has_pre_order_item"], false);
    }

    #[test]
    fn null_order_id_serializes_as_null() {
        let response = PickingSlipListResponse::from(sample_list());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["data"][1]["order_id"].is_null());
        assert_eq!(json["data"][1]["has_pre_order_item"], true);
    }

    #[test]
    fn meta_uses_camel_case_keys() {
        let response = PickingSlipListResponse::from(sample_list());
        let json = serde_json::to_value(&response).unwrap();

        let meta = &json["meta"];
        assert_eq!(meta["itemsPerPage"], 10);
        assert_eq!(meta["totalItems"], 1322);
        assert_eq!(meta["currentPage"], 1);
        assert_eq!(meta["totalPages"], 133);
    }

    #[test]
    fn absent_filter_serializes_as_null_status() {
        let response = PickingSlipListResponse::from(sample_list());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["meta"]["filter"]["status"].is_null());
    }

    #[test]
    fn named_filter_serializes_as_wire_name() {
        let mut list = sample_list();
        list.filter = Some(PickingSlipStatus::NotPrinted);
        let json = serde_json::to_value(PickingSlipListResponse::from(list)).unwrap();
        assert_eq!(json["meta"]["filter"]["status"], "not printed");
    }

    #[test]
    fn error_response_bad_request_shape() {
        let error = ErrorResponse::bad_request("limit must be a positive integer");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "limit must be a positive integer");
    }
}
