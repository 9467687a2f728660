/// Translation subsystem errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TranslationError {
    #[error("unsupported translation direction: {from} -> {to}")]
    UnsupportedDirection { from: String, to: String },

    #[error("translation model load failed for {direction}: {reason}")]
    ModelLoadFailed { direction: String, reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("translation disabled by configuration")]
    Disabled,
}
