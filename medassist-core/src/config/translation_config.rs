use serde::{Deserialize, Serialize};

use super::defaults;

/// Translation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// When false, every translation is a pass-through.
    pub enabled: bool,
    /// Directory with one `opus-mt-{src}-{tgt}` subdirectory per direction.
    pub models_dir: Option<String>,
    /// Beam width for generation.
    pub num_beams: usize,
    /// Upper bound on generated tokens per field.
    pub max_new_tokens: usize,
    /// ONNX Runtime intra-op threads per loaded model.
    pub intra_threads: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_TRANSLATION_ENABLED,
            models_dir: None,
            num_beams: defaults::DEFAULT_NUM_BEAMS,
            max_new_tokens: defaults::DEFAULT_MAX_NEW_TOKENS,
            intra_threads: defaults::DEFAULT_TRANSLATION_INTRA_THREADS,
        }
    }
}
