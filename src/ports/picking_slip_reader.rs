//! Picking slip reader port (read side).
//!
//! Defines the read contract the listing engine consumes: a page fetch and a
//! count fetch over the same filter predicate. Implementations must apply the
//! identical predicate to both operations so page contents and totals agree;
//! the two reads are otherwise independent and may run concurrently.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::status::PickingSlipStatus;

/// Reader port for picking slip listing queries.
///
/// Filter semantics: `Some(status)` restricts rows to that status's defining
/// predicate; `None` includes every row matching any of the three named
/// statuses. Rows outside the status vocabulary are never returned and never
/// counted, under any filter value.
#[async_trait]
pub trait PickingSlipReader: Send + Sync {
    /// Fetch one page of slip summaries matching the filter.
    async fn fetch_page(
        &self,
        filter: Option<PickingSlipStatus>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<PickingSlipSummary>, SlipReadError>;

    /// Count distinct slips matching the same filter predicate as
    /// [`fetch_page`](Self::fetch_page).
    async fn count_matching(&self, filter: Option<PickingSlipStatus>)
        -> Result<u64, SlipReadError>;
}

/// One row of the listing: a slip with its computed status and pre-order
/// aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickingSlipSummary {
    /// External order reference; null for slips not yet assigned to an order.
    pub order_id: Option<i64>,

    /// Slip identifier.
    pub picking_slip_id: i64,

    /// Classified lifecycle status.
    pub status: PickingSlipStatus,

    /// Whether at least one line item is a pre-order.
    pub has_pre_order_item: bool,
}

/// Errors that can occur during picking slip reads.
#[derive(Debug, thiserror::Error)]
pub enum SlipReadError {
    #[error("Database error: {0}")]
    Database(String),

    /// A fetched row did not classify into the status vocabulary. The filter
    /// predicate excludes such rows, so this indicates predicate/classifier
    /// drift rather than bad data.
    #[error("Picking slip {0} does not classify into the status vocabulary")]
    Unclassifiable(i64),
}

impl From<sqlx::Error> for SlipReadError {
    fn from(err: sqlx::Error) -> Self {
        SlipReadError::Database(err.to_string())
    }
}
