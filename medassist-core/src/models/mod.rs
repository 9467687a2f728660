mod clinical;
mod degradation_event;
mod degradation_log;
mod document;
mod health_report;
mod language;
mod ranking;
mod snippet;

pub use clinical::{ClinicalAssessment, DifferentialDiagnosis, Medication, TreatmentProtocol};
pub use degradation_event::DegradationEvent;
pub use degradation_log::DegradationLog;
pub use document::Document;
pub use health_report::{HealthReport, SemanticStatus};
pub use language::{Language, TranslationDirection, SUPPORTED_DIRECTIONS};
pub use ranking::{Ranking, ScoredDocument, StrategyKind};
pub use snippet::Snippet;
