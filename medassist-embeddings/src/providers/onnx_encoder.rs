//! ONNX Runtime sentence encoder.
//!
//! Loads a BERT-family export (`model.onnx` + `tokenizer.json`) via the `ort`
//! crate (v2) and mean-pools the last hidden state over the attention mask.

use std::path::Path;
use std::sync::Mutex;

use medassist_core::config::EmbeddingConfig;
use medassist_core::errors::{EmbeddingError, MedAssistResult};
use medassist_core::traits::ISemanticEncoder;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

use crate::similarity::mean_pool;

pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// ONNX-based sentence encoder.
pub struct OnnxEncoder {
    /// `run` needs `&mut Session`, so the session sits behind a Mutex.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    token_type_ids: bool,
    model_name: String,
}

impl OnnxEncoder {
    /// Load the encoder from a model directory.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelLoadFailed` if either file is missing or
    /// cannot be parsed.
    pub fn load(model_dir: &Path, config: &EmbeddingConfig) -> MedAssistResult<Self> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);
        let load_failed = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_dir.display().to_string(),
            reason,
        };

        for required in [&model_path, &tokenizer_path] {
            if !required.exists() {
                return Err(load_failed(format!("{} not found", required.display())).into());
            }
        }

        let mut tokenizer =
            Tokenizer::from_file(&tokenizer_path).map_err(|e| load_failed(e.to_string()))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: config.max_seq_len,
                ..Default::default()
            }))
            .map_err(|e| load_failed(e.to_string()))?;
        tokenizer.with_padding(None);

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(config.intra_threads)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(&model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let model_name = model_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-encoder")
            .to_string();

        debug!(model = %model_name, max_seq_len = config.max_seq_len, "ONNX encoder loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            token_type_ids: config.token_type_ids,
            model_name,
        })
    }

    fn infer(&self, text: &str) -> MedAssistResult<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("tokenization error: {e}"),
            })?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| i64::from(id)).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| i64::from(m))
            .collect();
        let type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|&t| i64::from(t))
            .collect();
        let seq_len = input_ids.len() as i64;

        let tensor_err = |e: ort::Error| EmbeddingError::InferenceFailed {
            reason: format!("tensor creation error: {e}"),
        };
        let ids_tensor = Tensor::from_array((vec![1i64, seq_len], input_ids)).map_err(tensor_err)?;
        let mask_tensor =
            Tensor::from_array((vec![1i64, seq_len], attention_mask.clone())).map_err(tensor_err)?;

        let inputs = if self.token_type_ids {
            let type_tensor =
                Tensor::from_array((vec![1i64, seq_len], type_ids)).map_err(tensor_err)?;
            ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ]
        } else {
            ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
            ]
        };

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(inputs)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // First output is the last hidden state for BERT exports.
        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        mean_pool(shape, data, &attention_mask)
    }
}

impl ISemanticEncoder for OnnxEncoder {
    fn encode(&self, text: &str) -> MedAssistResult<Vec<f32>> {
        self.infer(text)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OnnxEncoder::load(dir.path(), &EmbeddingConfig::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains(MODEL_FILE));
    }
}
