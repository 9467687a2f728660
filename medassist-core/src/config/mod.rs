//! Configuration, loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
mod embedding_config;
mod knowledge_config;
mod observability_config;
mod retrieval_config;
mod translation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use knowledge_config::KnowledgeConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use translation_config::TranslationConfig;

use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedAssistConfig {
    pub knowledge: KnowledgeConfig,
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub translation: TranslationConfig,
    pub observability: ObservabilityConfig,
}

impl MedAssistConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.top_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.retrieval.min_score.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.min_score".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if self.embedding.max_seq_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.max_seq_len".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.translation.num_beams == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "translation.num_beams".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.translation.max_new_tokens == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "translation.max_new_tokens".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.observability.max_degradation_events == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "observability.max_degradation_events".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
