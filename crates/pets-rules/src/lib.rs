//! pets-rules
//!
//! The triage decision engine. Pure data and pure functions — no AWS
//! dependency. Defines the symptom catalogue (one module per body system),
//! the risk-factor registry, the per-level disposition table, the
//! age-banded vital-sign classifier, the aggregation algorithm, the
//! GCS/PTS derived-score calculators, and the anaphylaxis dosage
//! calculator.
//!
//! Everything here is deterministic and total: for any well-typed
//! `PatientInput` the aggregator returns a level in 1–5 and a stable
//! reason list. Absent or non-positive readings are excluded from rule
//! evaluation, never treated as errors.

pub mod aggregate;
pub mod catalogue;
pub mod disposition;
pub mod dosage;
pub mod error;
pub mod risk;
pub mod scores;
pub mod vitals;
