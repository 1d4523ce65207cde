use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Pediatric CTAS acuity level. Lower rank = higher urgency; the derived
/// `Ord` puts `Critical` first, so `min` of two levels is the more urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriageLevel {
    /// 1级: 濒危 — resuscitation, immediate.
    Critical,
    /// 2级: 危重 — emergent, ≤15min.
    Emergent,
    /// 3级: 急症 — urgent, ≤1h.
    Urgent,
    /// 4级: 亚急症 — semi-urgent, ≤2h.
    SemiUrgent,
    /// 5级: 非急症 — non-urgent, ≤4h.
    NonUrgent,
}

impl TriageLevel {
    /// Numeric rank 1–5 as used in the CTAS tables (1 = most urgent).
    pub fn rank(self) -> u8 {
        match self {
            TriageLevel::Critical => 1,
            TriageLevel::Emergent => 2,
            TriageLevel::Urgent => 3,
            TriageLevel::SemiUrgent => 4,
            TriageLevel::NonUrgent => 5,
        }
    }

    pub fn from_rank(rank: u8) -> Result<Self, CoreError> {
        match rank {
            1 => Ok(TriageLevel::Critical),
            2 => Ok(TriageLevel::Emergent),
            3 => Ok(TriageLevel::Urgent),
            4 => Ok(TriageLevel::SemiUrgent),
            5 => Ok(TriageLevel::NonUrgent),
            other => Err(CoreError::InvalidLevel(other)),
        }
    }

    /// One step more urgent, floored at level 1.
    pub fn escalated(self) -> Self {
        match self {
            TriageLevel::Critical => TriageLevel::Critical,
            TriageLevel::Emergent => TriageLevel::Critical,
            TriageLevel::Urgent => TriageLevel::Emergent,
            TriageLevel::SemiUrgent => TriageLevel::Urgent,
            TriageLevel::NonUrgent => TriageLevel::SemiUrgent,
        }
    }
}
