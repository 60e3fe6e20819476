//! Picking slip status vocabulary and classification.
//!
//! A slip's status is derived from four nullable lifecycle timestamps by an
//! ordered priority chain. Timestamps outside the vocabulary (inspected or
//! shipped without a hold) classify to `None` and are invisible to the
//! listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a picking slip as exposed by the listing endpoint.
///
/// Wire names are `"not printed"`, `"printed"`, and `"held"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickingSlipStatus {
    #[serde(rename = "not printed")]
    NotPrinted,
    #[serde(rename = "printed")]
    Printed,
    #[serde(rename = "held")]
    Held,
}

/// The four milestone timestamps that determine a slip's status.
///
/// A slip without a lifecycle dates record projects to all-`None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusMilestones {
    pub printed_at: Option<DateTime<Utc>>,
    pub inspected_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub held_at: Option<DateTime<Utc>>,
}

impl PickingSlipStatus {
    /// All named statuses, in rule order.
    pub const ALL: [PickingSlipStatus; 3] = [
        PickingSlipStatus::NotPrinted,
        PickingSlipStatus::Printed,
        PickingSlipStatus::Held,
    ];

    /// Classifies milestone timestamps into a status, first matching rule
    /// wins:
    ///
    /// 1. all four absent -> `NotPrinted`
    /// 2. printed present, inspected/shipped/held absent -> `Printed`
    /// 3. held present -> `Held`
    /// 4. otherwise -> `None` (not representable by this vocabulary)
    ///
    /// The rules form a priority chain, not independent predicates: a slip
    /// that is both printed and held fails rule 2 and lands on `Held`.
    pub fn classify(milestones: &StatusMilestones) -> Option<Self> {
        let StatusMilestones {
            printed_at,
            inspected_at,
            shipped_at,
            held_at,
        } = milestones;

        if printed_at.is_none()
            && inspected_at.is_none()
            && shipped_at.is_none()
            && held_at.is_none()
        {
            Some(PickingSlipStatus::NotPrinted)
        } else if printed_at.is_some()
            && inspected_at.is_none()
            && shipped_at.is_none()
            && held_at.is_none()
        {
            Some(PickingSlipStatus::Printed)
        } else if held_at.is_some() {
            Some(PickingSlipStatus::Held)
        } else {
            None
        }
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PickingSlipStatus::NotPrinted => "not printed",
            PickingSlipStatus::Printed => "printed",
            PickingSlipStatus::Held => "held",
        }
    }
}

impl fmt::Display for PickingSlipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing a status outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown picking slip status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for PickingSlipStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not printed" => Ok(PickingSlipStatus::NotPrinted),
            "printed" => Ok(PickingSlipStatus::Printed),
            "held" => Ok(PickingSlipStatus::Held),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
