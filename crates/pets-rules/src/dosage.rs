//! Anaphylaxis dosage calculator. Pure arithmetic over weight and age;
//! active only while an anaphylaxis-indicating symptom is selected.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalogue;

/// A weight-scaled dose range in milligrams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseRange {
    pub min_mg: f64,
    pub max_mg: f64,
}

/// Recommended emergency doses for anaphylaxis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnaphylaxisDosing {
    /// 肾上腺素 (IM), capped at the adult dose of 0.3 mg.
    pub epinephrine_mg: f64,
    /// 甲泼尼龙, 1–2 mg/kg.
    pub methylprednisolone: DoseRange,
    /// 氢化可的松, 2–4 mg/kg.
    pub hydrocortisone: DoseRange,
    /// 抗组胺药, fixed by age: 5 mg under 6 years, otherwise 10 mg.
    pub antihistamine_mg: f64,
}

/// Whether any selected symptom indicates anaphylaxis.
pub fn anaphylaxis_indicated(selected_symptoms: &BTreeSet<String>) -> bool {
    catalogue::anaphylaxis_symptom_ids()
        .iter()
        .any(|id| selected_symptoms.contains(*id))
}

/// Compute the dose set for a patient. `None` means the doses are
/// undetermined because no usable weight was entered.
pub fn anaphylaxis_dosing(weight_kg: Option<f64>, age_years: u32) -> Option<AnaphylaxisDosing> {
    let weight = weight_kg.filter(|w| *w > 0.0)?;

    Some(AnaphylaxisDosing {
        epinephrine_mg: (weight * 0.01).min(0.3),
        methylprednisolone: DoseRange {
            min_mg: weight,
            max_mg: weight * 2.0,
        },
        hydrocortisone: DoseRange {
            min_mg: weight * 2.0,
            max_mg: weight * 4.0,
        },
        antihistamine_mg: if age_years < 6 { 5.0 } else { 10.0 },
    })
}
