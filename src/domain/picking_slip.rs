//! Picking slip aggregate: slips, their lifecycle dates, and line items.
//!
//! The listing read path never mutates these records; the structs mirror the
//! warehouse schema (`picking_slips`, `picking_slip_dates`,
//! `picking_slip_items`) with the slip as the aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::StatusMilestones;

/// One unit of fulfillment work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickingSlip {
    pub id: i64,
    /// External order reference; slips can exist before order assignment.
    pub order_id: Option<i64>,
    pub order_fulfillment_order_id: Option<i64>,
    pub is_contained_single_product: bool,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle milestones of a slip; at most one record per slip.
///
/// Each milestone is an actor/timestamp pair. Timestamps are append-only in
/// practice; this read path only consumes current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickingSlipDates {
    pub id: i64,
    pub picking_slip_id: i64,
    pub printed_username: Option<String>,
    pub inspected_username: Option<String>,
    pub packed_username: Option<String>,
    pub shipped_username: Option<String>,
    pub held_username: Option<String>,
    pub cancelled_username: Option<String>,
    pub refunded_username: Option<String>,
    pub confirmed_username: Option<String>,
    pub printed_at: Option<DateTime<Utc>>,
    pub inspected_at: Option<DateTime<Utc>>,
    pub packed_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub refunded_at: Option<DateTime<Utc>>,
    pub held_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Only meaningful while `held_at` is set.
    pub held_reason: Option<String>,
}

impl PickingSlipDates {
    /// Projects the record onto the four milestones that drive status
    /// classification.
    pub fn status_milestones(&self) -> StatusMilestones {
        StatusMilestones {
            printed_at: self.printed_at,
            inspected_at: self.inspected_at,
            shipped_at: self.shipped_at,
            held_at: self.held_at,
        }
    }
}

/// One order line fulfilled within a slip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickingSlipItem {
    pub id: i64,
    pub picking_slip_id: i64,
    pub item_id: i64,
    pub stock_id: Option<i64>,
    pub order_fulfillment_product_id: i64,
    pub quantity: i32,
    pub refunded_quantity: i32,
    pub location_id: Option<i64>,
    pub location_code: Option<String>,
    pub is_pre_order: bool,
    pub is_sales_only: bool,
    pub pre_order_shipping_at: Option<DateTime<Utc>>,
    pub pre_order_deadline_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// True if at least one line item is a pre-order. An empty collection has no
/// pre-order items.
pub fn has_pre_order_item(items: &[PickingSlipItem]) -> bool {
    items.iter().any(|item| item.is_pre_order)
}
