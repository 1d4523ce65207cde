//! The triage session state machine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use pets_bedrock::narrative::{self, NarrativeInput};
use pets_core::models::age::Age;
use pets_core::models::patient::{PatientInput, VitalReadings};
use pets_rules::aggregate::{self, TriageOutcome};
use pets_rules::dosage::{self, AnaphylaxisDosing};
use pets_rules::scores::{GCS_INJECTED_IDS, GcsAssessment, PTS_INJECTED_ID, PtsAssessment};
use pets_rules::{catalogue, risk};

use crate::error::SessionError;
use crate::input;

/// The literal text shown when narrative generation fails. Failures never
/// propagate past this boundary; the operator can simply retry.
pub const NARRATIVE_FALLBACK: &str = "报告生成失败";

/// Age entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeField {
    Years,
    Months,
    Days,
}

/// Vital-sign entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalField {
    Temperature,
    HeartRate,
    RespRate,
    SystolicBp,
    Spo2,
    Crt,
}

/// The single pending-confirmation slot. A new pending request replaces
/// any prior one; confirming or cancelling clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum PendingItem {
    Symptom(String),
    RiskFactor(String),
}

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The item carries confirmation text; it is now pending and enters
    /// the selected set only via [`TriageSession::confirm_pending`].
    ConfirmationRequired,
}

/// One in-memory triage encounter. Created empty, mutated by operator
/// actions, fully cleared by [`TriageSession::reset`]; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageSession {
    age_years: String,
    age_months: String,
    age_days: String,
    weight: String,
    temperature: String,
    heart_rate: String,
    resp_rate: String,
    systolic_bp: String,
    spo2: String,
    crt: String,
    selected_symptoms: BTreeSet<String>,
    selected_risk_factors: BTreeSet<String>,
    pending: Option<PendingItem>,
    narrative: Option<String>,
    generating: bool,
}

impl TriageSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Edit boundary ────────────────────────────────────────────────────

    /// Apply an age-field edit. Non-digit input is rejected silently and
    /// the prior value retained.
    pub fn edit_age(&mut self, field: AgeField, value: &str) {
        if !input::is_integer_edit(value) {
            return;
        }
        let slot = match field {
            AgeField::Years => &mut self.age_years,
            AgeField::Months => &mut self.age_months,
            AgeField::Days => &mut self.age_days,
        };
        *slot = value.to_string();
    }

    /// Apply a weight edit (decimal, at most one point; silent reject).
    pub fn edit_weight(&mut self, value: &str) {
        if input::is_decimal_edit(value) {
            self.weight = value.to_string();
        }
    }

    /// Apply a vital-sign edit (decimal, at most one point; silent reject).
    pub fn edit_vital(&mut self, field: VitalField, value: &str) {
        if !input::is_decimal_edit(value) {
            return;
        }
        let slot = match field {
            VitalField::Temperature => &mut self.temperature,
            VitalField::HeartRate => &mut self.heart_rate,
            VitalField::RespRate => &mut self.resp_rate,
            VitalField::SystolicBp => &mut self.systolic_bp,
            VitalField::Spo2 => &mut self.spo2,
            VitalField::Crt => &mut self.crt,
        };
        *slot = value.to_string();
    }

    pub fn age_value(&self, field: AgeField) -> &str {
        match field {
            AgeField::Years => &self.age_years,
            AgeField::Months => &self.age_months,
            AgeField::Days => &self.age_days,
        }
    }

    pub fn weight_value(&self) -> &str {
        &self.weight
    }

    pub fn vital_value(&self, field: VitalField) -> &str {
        match field {
            VitalField::Temperature => &self.temperature,
            VitalField::HeartRate => &self.heart_rate,
            VitalField::RespRate => &self.resp_rate,
            VitalField::SystolicBp => &self.systolic_bp,
            VitalField::Spo2 => &self.spo2,
            VitalField::Crt => &self.crt,
        }
    }

    // ── Selection state machine ──────────────────────────────────────────

    /// Toggle a symptom. Deselection is always direct; selection of a
    /// confirmation-gated symptom parks it in the pending slot instead.
    pub fn toggle_symptom(&mut self, id: &str) -> Result<ToggleOutcome, SessionError> {
        if self.selected_symptoms.remove(id) {
            return Ok(ToggleOutcome::Deselected);
        }
        let symptom = catalogue::symptom(id)?;
        if symptom.helper_info.is_some() {
            self.pending = Some(PendingItem::Symptom(symptom.id.clone()));
            return Ok(ToggleOutcome::ConfirmationRequired);
        }
        self.selected_symptoms.insert(symptom.id.clone());
        self.invalidate_narrative();
        Ok(ToggleOutcome::Selected)
    }

    /// Toggle a risk factor. Either direction invalidates the narrative.
    pub fn toggle_risk_factor(&mut self, id: &str) -> Result<ToggleOutcome, SessionError> {
        if self.selected_risk_factors.remove(id) {
            self.invalidate_narrative();
            return Ok(ToggleOutcome::Deselected);
        }
        let factor = risk::risk_factor(id)?;
        if factor.helper_info.is_some() {
            self.pending = Some(PendingItem::RiskFactor(factor.id.clone()));
            return Ok(ToggleOutcome::ConfirmationRequired);
        }
        self.selected_risk_factors.insert(factor.id.clone());
        self.invalidate_narrative();
        Ok(ToggleOutcome::Selected)
    }

    pub fn pending(&self) -> Option<&PendingItem> {
        self.pending.as_ref()
    }

    /// Confirm the pending item, moving it into its selected set.
    pub fn confirm_pending(&mut self) -> Result<(), SessionError> {
        match self.pending.take() {
            Some(PendingItem::Symptom(id)) => {
                self.selected_symptoms.insert(id);
                self.invalidate_narrative();
                Ok(())
            }
            Some(PendingItem::RiskFactor(id)) => {
                self.selected_risk_factors.insert(id);
                self.invalidate_narrative();
                Ok(())
            }
            None => Err(SessionError::NothingPending),
        }
    }

    /// Cancel any pending confirmation. Idempotent.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    pub fn selected_symptoms(&self) -> &BTreeSet<String> {
        &self.selected_symptoms
    }

    pub fn selected_risk_factors(&self) -> &BTreeSet<String> {
        &self.selected_risk_factors
    }

    /// Clear the whole session back to its created-empty state.
    pub fn reset(&mut self) {
        *self = Self {
            // A reset while a request is in flight keeps the guard so the
            // late completion cannot race a fresh request.
            generating: self.generating,
            ..Self::default()
        };
    }

    // ── Derived-score application ────────────────────────────────────────

    /// Apply a GCS total: drop any previously injected GCS band symptom,
    /// then select the band the new total falls into.
    pub fn apply_gcs(&mut self, gcs: &GcsAssessment) {
        for id in GCS_INJECTED_IDS {
            self.selected_symptoms.remove(*id);
        }
        self.selected_symptoms
            .insert(gcs.triage_symptom_id().to_string());
        self.invalidate_narrative();
    }

    /// Apply a PTS total: select 严重多发伤 for totals ≤8, deselect it
    /// otherwise.
    pub fn apply_pts(&mut self, pts: &PtsAssessment) {
        if pts.severe() {
            self.selected_symptoms.insert(PTS_INJECTED_ID.to_string());
            self.invalidate_narrative();
        } else {
            self.selected_symptoms.remove(PTS_INJECTED_ID);
        }
    }

    // ── Evaluation ───────────────────────────────────────────────────────

    /// The typed engine input parsed from the current entry fields.
    pub fn input(&self) -> PatientInput {
        PatientInput {
            age: Age::new(
                input::parse_age_part(&self.age_years),
                input::parse_age_part(&self.age_months),
                input::parse_age_part(&self.age_days),
            ),
            weight_kg: input::parse_reading(&self.weight),
            vitals: VitalReadings {
                temperature: input::parse_reading(&self.temperature),
                heart_rate: input::parse_reading(&self.heart_rate),
                resp_rate: input::parse_reading(&self.resp_rate),
                systolic_bp: input::parse_reading(&self.systolic_bp),
                spo2: input::parse_reading(&self.spo2),
                crt: input::parse_reading(&self.crt),
            },
            selected_symptoms: self.selected_symptoms.clone(),
            selected_risk_factors: self.selected_risk_factors.clone(),
        }
    }

    /// Recompute the recommendation. Pure and cheap; callers invoke it
    /// after every mutation.
    pub fn evaluate(&self) -> TriageOutcome {
        aggregate::aggregate(&self.input())
    }

    /// Whether the dosage calculator is active.
    pub fn anaphylaxis_indicated(&self) -> bool {
        dosage::anaphylaxis_indicated(&self.selected_symptoms)
    }

    /// Dose set for the current weight and age; `None` while the weight
    /// is missing or unusable.
    pub fn anaphylaxis_dosing(&self) -> Option<AnaphylaxisDosing> {
        dosage::anaphylaxis_dosing(
            input::parse_reading(&self.weight),
            input::parse_age_part(&self.age_years),
        )
    }

    // ── Narrative lifecycle ──────────────────────────────────────────────

    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Take the single-flight guard. Returns false (no-op) while a
    /// request is already pending.
    pub fn begin_narrative(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        true
    }

    /// Store the completed narrative (or the fallback text) and release
    /// the guard.
    pub fn finish_narrative(&mut self, text: String) {
        self.narrative = Some(text);
        self.generating = false;
    }

    /// Dismiss the displayed narrative.
    pub fn clear_narrative(&mut self) {
        self.narrative = None;
    }

    fn invalidate_narrative(&mut self) {
        self.narrative = None;
    }

    /// The structured summary handed to the narrative generator: raw
    /// entry strings, selected symptom names in catalogue order, risk
    /// factors prefixed `[风险] `, and the current level name.
    pub fn narrative_input(&self) -> NarrativeInput {
        let mut findings: Vec<String> = Vec::new();
        for category in catalogue::categories() {
            for symptom in &category.symptoms {
                if self.selected_symptoms.contains(&symptom.id) {
                    findings.push(symptom.name.clone());
                }
            }
        }
        for factor in risk::risk_factors() {
            if self.selected_risk_factors.contains(&factor.id) {
                findings.push(format!("[风险] {}", factor.name));
            }
        }

        NarrativeInput {
            age_years: self.age_years.clone(),
            age_months: self.age_months.clone(),
            age_days: self.age_days.clone(),
            weight: self.weight.clone(),
            temperature: self.temperature.clone(),
            heart_rate: self.heart_rate.clone(),
            resp_rate: self.resp_rate.clone(),
            systolic_bp: self.systolic_bp.clone(),
            spo2: self.spo2.clone(),
            crt: self.crt.clone(),
            findings,
            level_name: self.evaluate().disposition.level_name,
        }
    }
}

/// Run one narrative request against a shared session: take the
/// single-flight guard, call Bedrock, and store either the model text or
/// the fixed fallback. A second call while one is pending returns
/// immediately without queueing.
pub async fn generate_session_narrative(
    session: &Mutex<TriageSession>,
    config: &aws_config::SdkConfig,
    model_id: &str,
) {
    let narrative_input = {
        let mut guard = session.lock().await;
        if !guard.begin_narrative() {
            return;
        }
        guard.narrative_input()
    };

    let text = match narrative::generate_narrative(config, model_id, &narrative_input).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "narrative generation failed");
            NARRATIVE_FALLBACK.to_string()
        }
    };

    session.lock().await.finish_narrative(text);
}
