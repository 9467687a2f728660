//! Translation backends and the loader that materializes them per direction.

pub mod onnx_translator;

use std::path::PathBuf;
use std::sync::Arc;

use medassist_core::config::TranslationConfig;
use medassist_core::errors::MedAssistResult;
use medassist_core::models::TranslationDirection;
use medassist_core::traits::{ITranslationBackend, ITranslationLoader};
use tracing::info;

pub use onnx_translator::OnnxTranslator;

/// Loads `{models_dir}/opus-mt-{src}-{tgt}/` exports.
#[derive(Debug, Clone)]
pub struct OnnxTranslationLoader {
    models_dir: PathBuf,
    intra_threads: usize,
}

impl OnnxTranslationLoader {
    pub fn new(models_dir: impl Into<PathBuf>, intra_threads: usize) -> Self {
        Self {
            models_dir: models_dir.into(),
            intra_threads,
        }
    }

    pub fn models_dir(&self) -> &std::path::Path {
        &self.models_dir
    }
}

impl ITranslationLoader for OnnxTranslationLoader {
    fn load(&self, direction: TranslationDirection) -> MedAssistResult<Arc<dyn ITranslationBackend>> {
        let dir = self.models_dir.join(direction.model_name());
        info!(direction = %direction, path = %dir.display(), "loading translation model");
        let translator = OnnxTranslator::load(&dir, direction, self.intra_threads)?;
        Ok(Arc::new(translator))
    }
}

/// Build the loader described by `config`.
///
/// Returns `None` when translation is disabled or no models directory is
/// configured; the gateway then passes every text through.
pub fn create_loader(config: &TranslationConfig) -> Option<Arc<dyn ITranslationLoader>> {
    if !config.enabled {
        info!("translation disabled by configuration");
        return None;
    }
    let Some(models_dir) = config.models_dir.as_deref() else {
        info!("translation.models_dir not configured, translation disabled");
        return None;
    };
    Some(Arc::new(OnnxTranslationLoader::new(
        models_dir,
        config.intra_threads,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medassist_core::models::Language;

    #[test]
    fn disabled_config_has_no_loader() {
        let config = TranslationConfig {
            enabled: false,
            models_dir: Some("/models".to_string()),
            ..Default::default()
        };
        assert!(create_loader(&config).is_none());
    }

    #[test]
    fn missing_models_dir_has_no_loader() {
        assert!(create_loader(&TranslationConfig::default()).is_none());
    }

    #[test]
    fn loader_resolves_direction_subdirectory() {
        let root = tempfile::tempdir().unwrap();
        let loader = OnnxTranslationLoader::new(root.path(), 1);
        let err = loader
            .load(TranslationDirection::new(Language::En, Language::Ta))
            .err()
            .unwrap();
        assert!(err.to_string().contains("opus-mt-en-ta"));
    }
}
