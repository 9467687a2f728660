/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("scoring failed with {strategy} strategy: {reason}")]
    ScoringFailed { strategy: String, reason: String },

    #[error("invalid retrieval parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}
