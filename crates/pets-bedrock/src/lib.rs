//! pets-bedrock
//!
//! Clinical-narrative generation via the AWS Bedrock Converse API. The
//! triage engine stays pure; this crate is the one external collaborator,
//! turning a structured patient summary into a free-text expert analysis.

pub mod error;
pub mod narrative;
