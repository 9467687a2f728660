//! # medassist-translation
//!
//! English-to-Indic translation for display text.
//!
//! - [`ModelCache`]: lazily loads one backend per direction, single-flight per key.
//! - [`TranslationGateway`]: never-failing `ITranslator`; any problem returns the input unchanged.
//! - [`Localize`]: field-by-field localization of snippets and clinical display types.

pub mod gateway;
pub mod generation;
pub mod localize;
pub mod model_cache;
pub mod providers;

pub use gateway::TranslationGateway;
pub use localize::Localize;
pub use model_cache::ModelCache;
pub use providers::{create_loader, OnnxTranslationLoader, OnnxTranslator};
