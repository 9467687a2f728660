use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the knowledge base JSON file. A missing file yields an empty store.
    pub path: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_KNOWLEDGE_PATH.to_string(),
        }
    }
}
