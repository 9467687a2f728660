/// MedAssist core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language all reasoning and knowledge text is written in.
pub const SOURCE_LANGUAGE: crate::models::Language = crate::models::Language::En;

/// Epsilon added to each vector norm in cosine similarity.
pub const COSINE_EPSILON: f32 = 1e-8;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "MEDASSIST_LOG";

/// Component names used in degradation events.
pub mod components {
    pub const RETRIEVAL: &str = "retrieval";
    pub const SEMANTIC_BACKEND: &str = "semantic-backend";
    pub const TRANSLATION: &str = "translation";
    pub const KNOWLEDGE: &str = "knowledge";
}
