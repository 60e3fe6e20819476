//! ListPickingSlipsHandler - query handler for the picking slip listing.
//!
//! Issues the page fetch and the count fetch as two concurrent reads against
//! the reader port. Both reads carry the same filter, so totals stay
//! consistent with page contents; a failure of either read fails the whole
//! query rather than returning partial results.

use std::sync::Arc;

use crate::domain::status::PickingSlipStatus;
use crate::ports::{PickingSlipReader, PickingSlipSummary, SlipReadError};

/// Query to list picking slips.
///
/// `page` and `limit` are validated positive by the HTTP facade before the
/// query is constructed; the handler assumes valid input.
#[derive(Debug, Clone, Copy)]
pub struct ListPickingSlipsQuery {
    pub status: Option<PickingSlipStatus>,
    pub page: u32,
    pub limit: u32,
}

impl ListPickingSlipsQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    /// First page with default page size, optionally filtered.
    pub fn first_page(status: Option<PickingSlipStatus>) -> Self {
        Self {
            status,
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Zero-based row offset of the requested page.
    fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Paginated listing result with count metadata.
#[derive(Debug, Clone)]
pub struct PickingSlipList {
    /// Slips on this page.
    pub items: Vec<PickingSlipSummary>,

    /// Page size used for the query.
    pub items_per_page: u32,

    /// Distinct slips matching the filter, counted independently of the page.
    pub total_items: u64,

    /// The requested page number.
    pub current_page: u32,

    /// `ceil(total_items / items_per_page)`.
    pub total_pages: u64,

    /// The filter the listing was computed under.
    pub filter: Option<PickingSlipStatus>,
}

/// Handler for listing picking slips.
pub struct ListPickingSlipsHandler {
    reader: Arc<dyn PickingSlipReader>,
}

impl ListPickingSlipsHandler {
    pub fn new(reader: Arc<dyn PickingSlipReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListPickingSlipsQuery,
    ) -> Result<PickingSlipList, SlipReadError> {
        let (items, total_items) = tokio::try_join!(
            self.reader.fetch_page(query.status, query.limit, query.offset()),
            self.reader.count_matching(query.status),
        )?;

        let total_pages = total_items.div_ceil(u64::from(query.limit));

        Ok(PickingSlipList {
            items,
            items_per_page: query.limit,
            total_items,
            current_page: query.page,
            total_pages,
            filter: query.status,
        })
    }
}
