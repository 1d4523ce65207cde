use thiserror::Error;

use pets_rules::error::RuleError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("no confirmation pending")]
    NothingPending,
}
