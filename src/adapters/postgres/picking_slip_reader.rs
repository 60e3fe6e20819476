//! PostgreSQL implementation of PickingSlipReader.
//!
//! Both reads share one predicate constructor: the filter is pushed into the
//! WHERE clause as the status's defining condition, and the page fetch then
//! labels each returned row through the domain classifier. Rows outside the
//! status vocabulary never match the predicate, so they are absent from pages
//! and counts alike.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::status::{PickingSlipStatus, StatusMilestones};
use crate::ports::{PickingSlipReader, PickingSlipSummary, SlipReadError};

/// PostgreSQL implementation of PickingSlipReader.
#[derive(Clone)]
pub struct PostgresPickingSlipReader {
    pool: PgPool,
}

impl PostgresPickingSlipReader {
    /// Creates a new PostgresPickingSlipReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PickingSlipReader for PostgresPickingSlipReader {
    async fn fetch_page(
        &self,
        filter: Option<PickingSlipStatus>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<PickingSlipSummary>, SlipReadError> {
        // Grouped by slip identity plus the four milestone columns so the
        // pre-order aggregate collapses item rows per slip.
        let query = format!(
            r#"
            SELECT ps.order_id,
                   ps.id AS picking_slip_id,
                   psd.printed_at, psd.inspected_at, psd.shipped_at, psd.held_at,
                   COALESCE(BOOL_OR(psi.is_pre_order), FALSE) AS has_pre_order_item
            FROM picking_slips ps
            LEFT JOIN picking_slip_dates psd ON psd.picking_slip_id = ps.id
            LEFT JOIN picking_slip_items psi ON psi.picking_slip_id = ps.id
            WHERE {predicate}
            GROUP BY ps.order_id, ps.id,
                     psd.printed_at, psd.inspected_at, psd.shipped_at, psd.held_at
            ORDER BY ps.id
            LIMIT $1 OFFSET $2
            "#,
            predicate = status_predicate(filter)
        );

        let rows = sqlx::query(&query)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn count_matching(
        &self,
        filter: Option<PickingSlipStatus>,
    ) -> Result<u64, SlipReadError> {
        let query = format!(
            r#"
            SELECT COUNT(DISTINCT ps.id)
            FROM picking_slips ps
            LEFT JOIN picking_slip_dates psd ON psd.picking_slip_id = ps.id
            LEFT JOIN picking_slip_items psi ON psi.picking_slip_id = ps.id
            WHERE {predicate}
            "#,
            predicate = status_predicate(filter)
        );

        let total: (i64,) = sqlx::query_as(&query).fetch_one(&self.pool).await?;

        Ok(total.0 as u64)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

const NOT_PRINTED_PREDICATE: &str = "psd.printed_at IS NULL \
     AND psd.inspected_at IS NULL \
     AND psd.shipped_at IS NULL \
     AND psd.held_at IS NULL";

const PRINTED_PREDICATE: &str = "psd.printed_at IS NOT NULL \
     AND psd.inspected_at IS NULL \
     AND psd.shipped_at IS NULL \
     AND psd.held_at IS NULL";

const HELD_PREDICATE: &str = "psd.held_at IS NOT NULL";

/// WHERE fragment for a filter value. The unfiltered listing is the
/// disjunction of the three named predicates; rows matching none of them
/// (inspected or shipped without a hold) are excluded everywhere.
fn status_predicate(filter: Option<PickingSlipStatus>) -> String {
    match filter {
        Some(PickingSlipStatus::NotPrinted) => NOT_PRINTED_PREDICATE.to_string(),
        Some(PickingSlipStatus::Printed) => PRINTED_PREDICATE.to_string(),
        Some(PickingSlipStatus::Held) => HELD_PREDICATE.to_string(),
        None => format!(
            "({NOT_PRINTED_PREDICATE}) OR ({PRINTED_PREDICATE}) OR ({HELD_PREDICATE})"
        ),
    }
}

fn row_to_summary(row: sqlx::postgres::PgRow) -> Result<PickingSlipSummary, SlipReadError> {
    let order_id: Option<i64> = row.try_get("order_id")?;
    let picking_slip_id: i64 = row.try_get("picking_slip_id")?;
    let has_pre_order_item: bool = row.try_get("has_pre_order_item")?;

    let milestones = StatusMilestones {
        printed_at: row.try_get::<Option<DateTime<Utc>>, _>("printed_at")?,
        inspected_at: row.try_get::<Option<DateTime<Utc>>, _>("inspected_at")?,
        shipped_at: row.try_get::<Option<DateTime<Utc>>, _>("shipped_at")?,
        held_at: row.try_get::<Option<DateTime<Utc>>, _>("held_at")?,
    };

    // The WHERE predicate only admits classifiable rows; drift between the
    // predicate and the classifier must fail loudly, not skew the listing.
    let status = PickingSlipStatus::classify(&milestones)
        .ok_or(SlipReadError::Unclassifiable(picking_slip_id))?;

    Ok(PickingSlipSummary {
        order_id,
        picking_slip_id,
        status,
        has_pre_order_item,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_filters_use_their_defining_predicate() {
        let not_printed = status_predicate(Some(PickingSlipStatus::NotPrinted));
        assert!(not_printed.contains("psd.printed_at IS NULL"));
        assert!(not_printed.contains("psd.held_at IS NULL"));

        let printed = status_predicate(Some(PickingSlipStatus::Printed));
        assert!(printed.contains("psd.printed_at IS NOT NULL"));
        assert!(printed.contains("psd.inspected_at IS NULL"));
        assert!(printed.contains("psd.shipped_at IS NULL"));
        assert!(printed.contains("psd.held_at IS NULL"));

        assert_eq!(
            status_predicate(Some(PickingSlipStatus::Held)),
            "psd.held_at IS NOT NULL"
        );
    }

    #[test]
    fn unfiltered_predicate_is_union_of_named_predicates() {
        let unfiltered = status_predicate(None);
        assert_eq!(
            unfiltered,
            format!("({NOT_PRINTED_PREDICATE}) OR ({PRINTED_PREDICATE}) OR ({HELD_PREDICATE})")
        );
    }

    #[test]
    fn held_predicate_ignores_other_milestones() {
        // A slip both printed and held must match the held filter, so the
        // held predicate cannot constrain printed/inspected/shipped.
        let held = status_predicate(Some(PickingSlipStatus::Held));
        assert!(!held.contains("printed_at"));
        assert!(!held.contains("inspected_at"));
        assert!(!held.contains("shipped_at"));
    }
}
