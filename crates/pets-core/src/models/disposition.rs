use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::level::TriageLevel;

/// Per-level response metadata: where the patient goes, how fast a
/// physician must see them, and the standard first interventions.
/// Exactly one disposition exists per triage level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Disposition {
    pub level: TriageLevel,
    /// e.g. "1级: 濒危".
    pub level_name: String,
    /// e.g. "≤15min".
    pub response_time: String,
    /// e.g. "抢救室".
    pub zone: String,
    /// UI badge class for the zone, e.g. "bg-red-600".
    pub zone_color: String,
    pub description: String,
    pub interventions: Vec<String>,
}
