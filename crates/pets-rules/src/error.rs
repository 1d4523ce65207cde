use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("unknown risk factor: {0}")]
    UnknownRiskFactor(String),
}
