//! # medassist-core
//!
//! Foundation crate for the MedAssist NLP core.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MedAssistConfig;
pub use errors::{MedAssistError, MedAssistResult};
pub use models::{Document, Language, Snippet, TranslationDirection};
