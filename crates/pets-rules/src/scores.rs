//! Derived score calculators: Glasgow Coma Scale and Pediatric Trauma
//! Score. Each maps a multi-factor sum to a catalogue symptom id; the
//! session's "apply to triage" inserts that id into the selected set, so
//! the injected score participates in aggregation exactly like a manually
//! selected symptom.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ── Glasgow Coma Scale ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EyeOpening {
    NoResponse,
    ToPain,
    ToSpeech,
    Spontaneous,
}

impl EyeOpening {
    pub fn points(self) -> u8 {
        match self {
            EyeOpening::NoResponse => 1,
            EyeOpening::ToPain => 2,
            EyeOpening::ToSpeech => 3,
            EyeOpening::Spontaneous => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VerbalResponse {
    NoResponse,
    Incomprehensible,
    InappropriateWords,
    Confused,
    Oriented,
}

impl VerbalResponse {
    pub fn points(self) -> u8 {
        match self {
            VerbalResponse::NoResponse => 1,
            VerbalResponse::Incomprehensible => 2,
            VerbalResponse::InappropriateWords => 3,
            VerbalResponse::Confused => 4,
            VerbalResponse::Oriented => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MotorResponse {
    NoResponse,
    Extension,
    AbnormalFlexion,
    Withdrawal,
    LocalizesPain,
    ObeysCommands,
}

impl MotorResponse {
    pub fn points(self) -> u8 {
        match self {
            MotorResponse::NoResponse => 1,
            MotorResponse::Extension => 2,
            MotorResponse::AbnormalFlexion => 3,
            MotorResponse::Withdrawal => 4,
            MotorResponse::LocalizesPain => 5,
            MotorResponse::ObeysCommands => 6,
        }
    }
}

/// A completed GCS assessment. Total 3–15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GcsAssessment {
    pub eye: EyeOpening,
    pub verbal: VerbalResponse,
    pub motor: MotorResponse,
}

/// The catalogue ids the GCS calculator may inject. Applying a new total
/// removes all of these before inserting the matching one.
pub const GCS_INJECTED_IDS: &[&str] = &["n1", "n2", "n8"];

impl GcsAssessment {
    pub fn total(&self) -> u8 {
        self.eye.points() + self.verbal.points() + self.motor.points()
    }

    /// The catalogue symptom id for this total: ≤9 critical (n1), 10–13
    /// emergent (n2), otherwise alert (n8).
    pub fn triage_symptom_id(&self) -> &'static str {
        match self.total() {
            0..=9 => "n1",
            10..=13 => "n2",
            _ => "n8",
        }
    }
}

// ── Pediatric Trauma Score ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PtsWeight {
    OverTwentyKg,
    TenToTwentyKg,
    UnderTenKg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PtsAirway {
    Normal,
    Maintainable,
    Unmaintainable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PtsSystolicBp {
    OverNinety,
    FiftyToNinety,
    UnderFifty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PtsConsciousness {
    Awake,
    Obtunded,
    Comatose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PtsWound {
    None,
    Minor,
    MajorOrPenetrating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PtsSkeletal {
    None,
    ClosedFracture,
    OpenOrMultipleFractures,
}

/// Every PTS category scores +2 (normal), +1 (impaired), or −1 (severe).
fn pts_points(severity: u8) -> i8 {
    match severity {
        0 => 2,
        1 => 1,
        _ => -1,
    }
}

/// A completed PTS assessment. Total −6..=12; ≤8 flags severe trauma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PtsAssessment {
    pub weight: PtsWeight,
    pub airway: PtsAirway,
    pub systolic_bp: PtsSystolicBp,
    pub consciousness: PtsConsciousness,
    pub wound: PtsWound,
    pub skeletal: PtsSkeletal,
}

/// The catalogue id the PTS calculator injects (严重多发伤).
pub const PTS_INJECTED_ID: &str = "s1";

impl PtsAssessment {
    pub fn total(&self) -> i8 {
        pts_points(self.weight as u8)
            + pts_points(self.airway as u8)
            + pts_points(self.systolic_bp as u8)
            + pts_points(self.consciousness as u8)
            + pts_points(self.wound as u8)
            + pts_points(self.skeletal as u8)
    }

    /// Totals of 8 and below indicate severe trauma and inject `s1`;
    /// higher totals remove it.
    pub fn severe(&self) -> bool {
        self.total() <= 8
    }
}
