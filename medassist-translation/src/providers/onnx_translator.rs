//! OPUS-MT (Marian) translation backend on ONNX Runtime.
//!
//! Expects an encoder/decoder export directory:
//! `encoder_model.onnx`, `decoder_model.onnx`, `tokenizer.json`, `config.json`.
//! The encoder runs once per text; the decoder is re-run for every beam at
//! every step without a KV cache. Fields are short, so this stays cheap.

use std::path::Path;
use std::sync::Mutex;

use medassist_core::errors::{MedAssistResult, TranslationError};
use medassist_core::models::TranslationDirection;
use medassist_core::traits::{GenerationParams, ITranslationBackend};
use ort::session::Session;
use ort::value::Tensor;
use serde::Deserialize;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

use crate::generation::{beam_search, SpecialTokens};

pub const ENCODER_FILE: &str = "encoder_model.onnx";
pub const DECODER_FILE: &str = "decoder_model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const CONFIG_FILE: &str = "config.json";

/// Marian position embeddings cover 512 source tokens.
const MAX_SOURCE_TOKENS: usize = 512;

/// The subset of the HuggingFace `config.json` needed for decoding.
#[derive(Debug, Deserialize)]
struct ModelConfigFile {
    decoder_start_token_id: Option<i64>,
    eos_token_id: i64,
    pad_token_id: i64,
}

impl ModelConfigFile {
    fn special_tokens(&self) -> SpecialTokens {
        SpecialTokens {
            decoder_start: self.decoder_start_token_id.unwrap_or(self.pad_token_id),
            eos: self.eos_token_id,
            pad: self.pad_token_id,
        }
    }
}

/// Encoder output reused by every decoder step of one translation.
struct EncodedSource {
    attention_mask: Vec<i64>,
    hidden_shape: Vec<i64>,
    hidden: Vec<f32>,
}

/// One loaded translation direction.
pub struct OnnxTranslator {
    encoder: Mutex<Session>,
    decoder: Mutex<Session>,
    tokenizer: Tokenizer,
    special: SpecialTokens,
    name: String,
}

impl OnnxTranslator {
    /// Load the export in `model_dir` for `direction`.
    ///
    /// # Errors
    /// `TranslationError::ModelLoadFailed` if any file is missing or invalid.
    pub fn load(
        model_dir: &Path,
        direction: TranslationDirection,
        intra_threads: usize,
    ) -> MedAssistResult<Self> {
        let load_failed = |reason: String| TranslationError::ModelLoadFailed {
            direction: direction.to_string(),
            reason,
        };

        let encoder_path = model_dir.join(ENCODER_FILE);
        let decoder_path = model_dir.join(DECODER_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);
        let config_path = model_dir.join(CONFIG_FILE);

        for required in [&encoder_path, &decoder_path, &tokenizer_path, &config_path] {
            if !required.exists() {
                return Err(load_failed(format!("{} not found", required.display())).into());
            }
        }

        let config_text =
            std::fs::read_to_string(&config_path).map_err(|e| load_failed(e.to_string()))?;
        let config: ModelConfigFile = serde_json::from_str(&config_text)
            .map_err(|e| load_failed(format!("{CONFIG_FILE}: {e}")))?;

        let mut tokenizer =
            Tokenizer::from_file(&tokenizer_path).map_err(|e| load_failed(e.to_string()))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SOURCE_TOKENS,
                ..Default::default()
            }))
            .map_err(|e| load_failed(e.to_string()))?;
        tokenizer.with_padding(None);

        let build_session = |path: &Path| -> Result<Session, TranslationError> {
            Session::builder()
                .map_err(|e| load_failed(e.to_string()))?
                .with_intra_threads(intra_threads)
                .map_err(|e| load_failed(e.to_string()))?
                .commit_from_file(path)
                .map_err(|e| load_failed(e.to_string()))
        };
        let encoder = build_session(&encoder_path)?;
        let decoder = build_session(&decoder_path)?;

        let name = direction.model_name();
        debug!(model = %name, "translation model loaded");

        Ok(Self {
            encoder: Mutex::new(encoder),
            decoder: Mutex::new(decoder),
            tokenizer,
            special: config.special_tokens(),
            name,
        })
    }

    fn encode_source(&self, text: &str) -> MedAssistResult<EncodedSource> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| TranslationError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| i64::from(id)).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| i64::from(m))
            .collect();
        let seq_len = input_ids.len() as i64;

        let ids_tensor =
            Tensor::from_array((vec![1i64, seq_len], input_ids)).map_err(generation_failed)?;
        let mask_tensor = Tensor::from_array((vec![1i64, seq_len], attention_mask.clone()))
            .map_err(generation_failed)?;

        let mut session = self.encoder.lock().map_err(|e| TranslationError::GenerationFailed {
            reason: format!("encoder lock poisoned: {e}"),
        })?;
        let outputs = session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
            ])
            .map_err(generation_failed)?;

        // First output is `last_hidden_state`.
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| TranslationError::GenerationFailed {
                    reason: "encoder produced no output".to_string(),
                })?;
        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(generation_failed)?;

        Ok(EncodedSource {
            attention_mask,
            hidden_shape: shape.to_vec(),
            hidden: data.to_vec(),
        })
    }

    /// Logits for the position after `tokens`.
    fn decoder_step(&self, source: &EncodedSource, tokens: &[i64]) -> MedAssistResult<Vec<f32>> {
        let len = tokens.len() as i64;
        let src_len = source.attention_mask.len() as i64;

        let ids_tensor =
            Tensor::from_array((vec![1i64, len], tokens.to_vec())).map_err(generation_failed)?;
        let mask_tensor = Tensor::from_array((vec![1i64, src_len], source.attention_mask.clone()))
            .map_err(generation_failed)?;
        let hidden_tensor =
            Tensor::from_array((source.hidden_shape.clone(), source.hidden.clone()))
                .map_err(generation_failed)?;

        let mut session = self.decoder.lock().map_err(|e| TranslationError::GenerationFailed {
            reason: format!("decoder lock poisoned: {e}"),
        })?;
        let outputs = session
            .run(ort::inputs![
                "encoder_attention_mask" => mask_tensor,
                "input_ids" => ids_tensor,
                "encoder_hidden_states" => hidden_tensor,
            ])
            .map_err(generation_failed)?;

        // First output is `logits` with shape [1, len, vocab].
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| TranslationError::GenerationFailed {
                    reason: "decoder produced no output".to_string(),
                })?;
        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(generation_failed)?;

        let vocab = shape.last().copied().unwrap_or(0) as usize;
        if vocab == 0 || data.len() < vocab {
            return Err(TranslationError::GenerationFailed {
                reason: format!("unexpected logits shape {:?}", shape.to_vec()),
            }
            .into());
        }
        Ok(data[data.len() - vocab..].to_vec())
    }
}

fn generation_failed(e: ort::Error) -> TranslationError {
    TranslationError::GenerationFailed {
        reason: e.to_string(),
    }
}

impl ITranslationBackend for OnnxTranslator {
    fn translate(&self, text: &str, params: &GenerationParams) -> MedAssistResult<String> {
        let source = self.encode_source(text)?;
        let generated = beam_search(
            |tokens| self.decoder_step(&source, tokens),
            self.special,
            params,
        )?;

        let ids: Vec<u32> = generated
            .into_iter()
            .filter_map(|id| u32::try_from(id).ok())
            .collect();
        let decoded = self
            .tokenizer
            .decode(&ids, true)
            .map_err(|e| TranslationError::TokenizationFailed {
                reason: e.to_string(),
            })?;
        Ok(decoded)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medassist_core::models::Language;

    const EN_HI: TranslationDirection = TranslationDirection::new(Language::En, Language::Hi);

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = OnnxTranslator::load(dir.path(), EN_HI, 1).err().unwrap();
        let message = err.to_string();
        assert!(message.contains(ENCODER_FILE));
        assert!(message.contains("en->hi"));
    }

    #[test]
    fn config_falls_back_to_pad_as_decoder_start() {
        let config: ModelConfigFile =
            serde_json::from_str(r#"{"eos_token_id": 0, "pad_token_id": 61949}"#).unwrap();
        let special = config.special_tokens();
        assert_eq!(special.decoder_start, 61949);
        assert_eq!(special.eos, 0);
    }

    #[test]
    fn config_reads_explicit_decoder_start() {
        let config: ModelConfigFile = serde_json::from_str(
            r#"{"decoder_start_token_id": 7, "eos_token_id": 0, "pad_token_id": 61949, "vocab_size": 61950}"#,
        )
        .unwrap();
        assert_eq!(config.special_tokens().decoder_start, 7);
    }
}
