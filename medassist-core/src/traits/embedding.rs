use crate::errors::MedAssistResult;

/// Dense text encoder backing the semantic scoring strategy.
pub trait ISemanticEncoder: Send + Sync {
    /// Encode a text into a fixed-length vector.
    fn encode(&self, text: &str) -> MedAssistResult<Vec<f32>>;

    /// Human-readable encoder name. Part of embedding cache keys.
    fn name(&self) -> &str;
}
