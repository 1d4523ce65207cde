//! pets-session
//!
//! The in-memory triage session. Owns the raw entry fields, the selection
//! state machine (including the single pending-confirmation slot), the
//! derived-score "apply to triage" actions, and the narrative lifecycle
//! with its single-flight guard. Everything recomputes from scratch on
//! demand — the session is never persisted.

pub mod error;
pub mod input;
pub mod session;
