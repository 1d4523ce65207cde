//! Symptom catalogue: the static registry of clinical findings, grouped by
//! body system, each with its intrinsic triage level and (where the
//! standard requires a criteria check before selection) its confirmation
//! text.

mod allergy;
mod circulatory;
mod digestive;
mod hematologic;
mod neurologic;
mod respiratory;
mod toxicologic;
mod trauma;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pets_core::models::level::TriageLevel;

use crate::error::RuleError;

/// A catalogue symptom. Selecting one contributes its intrinsic level to
/// the aggregation; `helper_info`, when present, is the 判定标准 the
/// operator must confirm before the symptom counts as selected.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub level: TriageLevel,
    pub helper_info: Option<String>,
}

/// A body-system grouping of symptoms. Catalogue order is definition
/// order and fixes the reason-list ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomCategory {
    pub id: String,
    pub name: String,
    pub symptoms: Vec<Symptom>,
}

static CATEGORIES: LazyLock<Vec<SymptomCategory>> = LazyLock::new(|| {
    vec![
        neurologic::category(),
        respiratory::category(),
        circulatory::category(),
        digestive::category(),
        trauma::category(),
        allergy::category(),
        hematologic::category(),
        toxicologic::category(),
    ]
});

/// All body-system categories, in definition order.
pub fn categories() -> &'static [SymptomCategory] {
    &CATEGORIES
}

/// Look up a symptom by id across every category.
pub fn find_symptom(id: &str) -> Option<&'static Symptom> {
    CATEGORIES
        .iter()
        .flat_map(|c| &c.symptoms)
        .find(|s| s.id == id)
}

/// Look up a symptom by id, erroring on unknown ids.
pub fn symptom(id: &str) -> Result<&'static Symptom, RuleError> {
    find_symptom(id).ok_or_else(|| RuleError::UnknownSymptom(id.to_string()))
}

/// Symptom ids that indicate anaphylaxis and activate the emergency
/// dosage calculator.
pub fn anaphylaxis_symptom_ids() -> &'static [&'static str] {
    allergy::ANAPHYLAXIS_IDS
}
