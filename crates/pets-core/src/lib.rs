//! pets-core
//!
//! Pure domain types for the pediatric emergency triage standard (PETS).
//! No rule tables and no AWS dependency — this is the shared vocabulary of
//! the system: triage levels, patient input, vital readings, and the
//! normalized age representation.

pub mod error;
pub mod models;
