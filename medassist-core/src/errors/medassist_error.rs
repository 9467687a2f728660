use super::{ConfigError, EmbeddingError, KnowledgeError, RetrievalError, TranslationError};

/// Top-level error for the MedAssist core.
#[derive(Debug, thiserror::Error)]
pub enum MedAssistError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("runtime not initialized")]
    RuntimeNotInitialized,

    #[error("runtime already initialized")]
    RuntimeAlreadyInitialized,
}

pub type MedAssistResult<T> = Result<T, MedAssistError>;
