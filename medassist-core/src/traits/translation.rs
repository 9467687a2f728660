use std::sync::Arc;

use crate::errors::MedAssistResult;
use crate::models::{Language, TranslationDirection};

/// Decoding policy for a translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub num_beams: usize,
    pub max_new_tokens: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_beams: crate::config::defaults::DEFAULT_NUM_BEAMS,
            max_new_tokens: crate::config::defaults::DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

/// A loaded model for one translation direction.
pub trait ITranslationBackend: Send + Sync {
    /// Translate one short text.
    fn translate(&self, text: &str, params: &GenerationParams) -> MedAssistResult<String>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Materializes backends on demand. Called at most once per direction by the model cache.
pub trait ITranslationLoader: Send + Sync {
    fn load(&self, direction: TranslationDirection) -> MedAssistResult<Arc<dyn ITranslationBackend>>;
}

/// Best-effort single-string translation. Never fails.
pub trait ITranslator: Send + Sync {
    /// Translate `text` from English into `target_lang`, or return it unchanged.
    fn translate(&self, text: &str, target_lang: &str) -> String;

    /// Same as [`ITranslator::translate`] with an already-parsed language.
    fn translate_to(&self, text: &str, target: Language) -> String {
        self.translate(text, target.code())
    }
}
