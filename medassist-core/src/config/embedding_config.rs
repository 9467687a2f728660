use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Set to false to always score lexically.
    pub enabled: bool,
    /// Directory holding `model.onnx` and `tokenizer.json`.
    pub model_dir: Option<String>,
    /// Tokenizer truncation length.
    pub max_seq_len: usize,
    /// ONNX Runtime intra-op threads.
    pub intra_threads: usize,
    /// Whether the exported encoder takes a `token_type_ids` input (BERT-style).
    pub token_type_ids: bool,
    /// Max entries in the in-memory embedding cache.
    pub cache_capacity: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_EMBEDDING_ENABLED,
            model_dir: None,
            max_seq_len: defaults::DEFAULT_MAX_SEQ_LEN,
            intra_threads: defaults::DEFAULT_EMBEDDING_INTRA_THREADS,
            token_type_ids: defaults::DEFAULT_TOKEN_TYPE_IDS,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}
