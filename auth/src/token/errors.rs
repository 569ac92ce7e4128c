use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Random source could not supply token bytes: {0}")]
    EntropyFailure(String),
}
