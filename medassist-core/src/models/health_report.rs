use serde::{Deserialize, Serialize};

use super::{DegradationEvent, TranslationDirection};

/// Observable state of the semantic backend.
///
/// Moves from `Unknown` to one of the other two exactly once per lifetime
/// (or per explicit reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SemanticStatus {
    Unknown,
    Available { encoder: String },
    Unavailable { reason: String },
}

impl SemanticStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Point-in-time health snapshot of the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub knowledge_documents: usize,
    pub semantic: SemanticStatus,
    pub translation_enabled: bool,
    pub loaded_directions: Vec<TranslationDirection>,
    pub degradation_events: Vec<DegradationEvent>,
}
