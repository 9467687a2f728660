//! # medassist-embeddings
//!
//! Dense semantic encoding for knowledge retrieval.
//!
//! ## Architecture
//!
//! ```text
//! DegradationController (unknown → available | unavailable, single-flight)
//! └── loader → OnnxEncoder (BioBERT export, mean pooling)
//! EmbeddingCache (moka, blake3-keyed)
//! similarity (mean pooling, cosine with epsilon)
//! ```

pub mod cache;
pub mod degradation;
pub mod providers;
pub mod similarity;

pub use cache::EmbeddingCache;
pub use degradation::DegradationController;
pub use providers::{create_encoder, OnnxEncoder};
pub use similarity::{cosine_similarity, mean_pool};
