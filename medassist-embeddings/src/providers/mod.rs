//! Semantic encoder construction.

pub mod onnx_encoder;

pub use onnx_encoder::OnnxEncoder;

use std::path::Path;
use std::sync::Arc;

use medassist_core::config::EmbeddingConfig;
use medassist_core::errors::{EmbeddingError, MedAssistResult};
use medassist_core::traits::ISemanticEncoder;
use tracing::info;

/// Build the configured semantic encoder.
///
/// Fails when the backend is disabled, no model directory is configured, or
/// the model cannot be loaded. The degradation controller turns any of these
/// into the `unavailable` state.
pub fn create_encoder(config: &EmbeddingConfig) -> MedAssistResult<Arc<dyn ISemanticEncoder>> {
    if !config.enabled {
        return Err(EmbeddingError::Disabled.into());
    }
    let Some(ref dir) = config.model_dir else {
        return Err(EmbeddingError::ModelLoadFailed {
            path: "<unset>".to_string(),
            reason: "embedding.model_dir is not configured".to_string(),
        }
        .into());
    };

    let encoder = OnnxEncoder::load(Path::new(dir), config)?;
    info!(encoder = encoder.name(), "semantic encoder loaded");
    Ok(Arc::new(encoder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medassist_core::MedAssistError;

    #[test]
    fn disabled_config_fails_without_touching_disk() {
        let config = EmbeddingConfig {
            enabled: false,
            model_dir: Some("/does/not/matter".to_string()),
            ..Default::default()
        };
        let err = create_encoder(&config).err().unwrap();
        assert!(matches!(
            err,
            MedAssistError::Embedding(EmbeddingError::Disabled)
        ));
    }

    #[test]
    fn missing_model_dir_setting_fails() {
        let err = create_encoder(&EmbeddingConfig::default()).err().unwrap();
        assert!(err.to_string().contains("model_dir"));
    }

    #[test]
    fn missing_model_files_fail_with_path() {
        let config = EmbeddingConfig {
            model_dir: Some("/nonexistent/biobert".to_string()),
            ..Default::default()
        };
        let err = create_encoder(&config).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/biobert"));
    }
}
