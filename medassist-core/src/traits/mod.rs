mod embedding;
mod retriever;
mod translation;

pub use embedding::ISemanticEncoder;
pub use retriever::IRetriever;
pub use translation::{GenerationParams, ITranslationBackend, ITranslationLoader, ITranslator};
