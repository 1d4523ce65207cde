//! Aggregation: reduces selected symptoms, classifier findings, and
//! risk-factor escalation to one final level plus the display reasons.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pets_core::models::disposition::Disposition;
use pets_core::models::level::TriageLevel;
use pets_core::models::patient::PatientInput;

use crate::vitals::{self, VitalFinding};
use crate::{catalogue, disposition, risk};

/// The aggregator's output: the final level, its disposition, and the
/// ordered reason list (vital findings, then symptoms in catalogue order,
/// then risk factors in registry order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageOutcome {
    pub level: TriageLevel,
    pub disposition: Disposition,
    pub reasons: Vec<String>,
}

/// Compute the final triage level for one patient input.
///
/// Total over all valid inputs: starts at level 5, takes the minimum with
/// every selected symptom's intrinsic level and with the most urgent
/// classifier finding, then applies the one-step risk-factor escalation
/// (floored at level 1). Selected ids not present in the catalogue or
/// registry are ignored.
pub fn aggregate(input: &PatientInput) -> TriageOutcome {
    let findings = vitals::classify(&input.vitals, &input.age);

    let mut level = TriageLevel::NonUrgent;

    for symptom in selected_symptoms(input) {
        level = level.min(symptom.level);
    }

    if let Some(worst) = findings.iter().map(|f| f.level).min() {
        level = level.min(worst);
    }

    if has_escalating_risk(input) {
        level = level.escalated();
    }

    TriageOutcome {
        level,
        disposition: disposition::disposition_for(level).clone(),
        reasons: build_reasons(input, &findings),
    }
}

fn selected_symptoms(input: &PatientInput) -> impl Iterator<Item = &'static catalogue::Symptom> {
    catalogue::categories()
        .iter()
        .flat_map(|c| &c.symptoms)
        .filter(|s| input.selected_symptoms.contains(&s.id))
}

fn has_escalating_risk(input: &PatientInput) -> bool {
    risk::risk_factors()
        .iter()
        .any(|f| f.escalates && input.selected_risk_factors.contains(&f.id))
}

/// Reason list in stable display order: classifier tags in evaluation
/// order, symptom names in catalogue definition order, risk-factor names
/// in registry order.
fn build_reasons(input: &PatientInput, findings: &[VitalFinding]) -> Vec<String> {
    let mut reasons: Vec<String> = findings.iter().map(|f| f.tag.clone()).collect();

    for symptom in selected_symptoms(input) {
        reasons.push(symptom.name.clone());
    }

    for factor in risk::risk_factors() {
        if input.selected_risk_factors.contains(&factor.id) {
            reasons.push(factor.name.clone());
        }
    }

    reasons
}
