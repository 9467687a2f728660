//! Best-effort translation gateway.
//!
//! The only layer allowed to turn a translation error into a fallback: every
//! failure returns the original text unchanged and is logged and recorded as
//! a degradation event.

use medassist_core::config::TranslationConfig;
use medassist_core::constants::{components, SOURCE_LANGUAGE};
use medassist_core::errors::{MedAssistResult, TranslationError};
use medassist_core::models::{DegradationEvent, DegradationLog, Language, TranslationDirection};
use medassist_core::traits::{GenerationParams, ITranslator};
use tracing::{debug, warn};

use crate::model_cache::ModelCache;
use crate::providers::create_loader;

const PASS_THROUGH: &str = "pass-through";

pub struct TranslationGateway {
    /// `None` when translation is disabled: every call passes through.
    models: Option<ModelCache>,
    params: GenerationParams,
    events: DegradationLog,
}

impl TranslationGateway {
    pub fn new(models: ModelCache, params: GenerationParams) -> Self {
        Self {
            models: Some(models),
            params,
            events: DegradationLog::default(),
        }
    }

    /// A gateway with no backend wiring.
    pub fn disabled() -> Self {
        Self {
            models: None,
            params: GenerationParams::default(),
            events: DegradationLog::default(),
        }
    }

    /// Wire the ONNX loader described by `config`, or a disabled gateway.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let params = GenerationParams {
            num_beams: config.num_beams,
            max_new_tokens: config.max_new_tokens,
        };
        match create_loader(config) {
            Some(loader) => Self::new(ModelCache::new(loader), params),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.models.is_some()
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn models(&self) -> Option<&ModelCache> {
        self.models.as_ref()
    }

    /// Directions loaded so far. Empty when disabled.
    pub fn loaded_directions(&self) -> Vec<TranslationDirection> {
        self.models
            .as_ref()
            .map(ModelCache::loaded_directions)
            .unwrap_or_default()
    }

    /// Translate from English into `target`, surfacing every failure.
    ///
    /// Empty or whitespace-only text and English targets are returned as-is.
    /// The input is trimmed before generation and the output is trimmed.
    ///
    /// # Errors
    /// `TranslationError::Disabled` with no backend wiring, or any
    /// resolution/generation error from the model cache or backend.
    pub fn try_translate(&self, text: &str, target: Language) -> MedAssistResult<String> {
        if text.trim().is_empty() || target == SOURCE_LANGUAGE {
            return Ok(text.to_string());
        }
        let models = self.models.as_ref().ok_or(TranslationError::Disabled)?;
        let backend = models.resolve(TranslationDirection::new(SOURCE_LANGUAGE, target))?;
        let translated = backend.translate(text.trim(), &self.params)?;
        Ok(translated.trim().to_string())
    }

    /// Bound the number of buffered degradation events; the oldest are evicted first.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.events = DegradationLog::new(capacity);
        self
    }

    fn record(&self, event: DegradationEvent) {
        self.events.record(event);
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.events.drain()
    }
}

impl ITranslator for TranslationGateway {
    fn translate(&self, text: &str, target_lang: &str) -> String {
        if text.is_empty() || self.models.is_none() {
            return text.to_string();
        }

        let target = match Language::from_code(target_lang) {
            Some(target) => target,
            None => {
                let error = TranslationError::UnsupportedDirection {
                    from: SOURCE_LANGUAGE.code().to_string(),
                    to: target_lang.to_string(),
                };
                warn!(target_lang, error = %error, "unsupported target language, passing text through");
                self.record(DegradationEvent::now(
                    components::TRANSLATION,
                    error.to_string(),
                    PASS_THROUGH,
                ));
                return text.to_string();
            }
        };

        match self.try_translate(text, target) {
            Ok(translated) if translated.is_empty() => {
                debug!(target_lang = target.code(), "empty translation, keeping original text");
                text.to_string()
            }
            Ok(translated) => translated,
            Err(e) => {
                warn!(
                    target_lang = target.code(),
                    error = %e,
                    "translation failed, returning original text"
                );
                self.record(DegradationEvent::now(
                    components::TRANSLATION,
                    e.to_string(),
                    PASS_THROUGH,
                ));
                text.to_string()
            }
        }
    }
}

impl std::fmt::Debug for TranslationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationGateway")
            .field("enabled", &self.is_enabled())
            .field("params", &self.params)
            .finish()
    }
}
