//! Error taxonomy. One enum per subsystem, unified under [`MedAssistError`].

mod config_error;
mod embedding_error;
mod knowledge_error;
mod medassist_error;
mod retrieval_error;
mod translation_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use knowledge_error::KnowledgeError;
pub use medassist_error::{MedAssistError, MedAssistResult};
pub use retrieval_error::RetrievalError;
pub use translation_error::TranslationError;
