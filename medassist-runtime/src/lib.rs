//! # medassist-runtime
//!
//! Owns the process-wide MedAssist core: knowledge store, semantic
//! degradation controller, retrieval engine and translation gateway.

pub mod analysis;
pub mod runtime;
pub mod tracing_setup;

pub use analysis::Analysis;
pub use runtime::{get, initialize, is_initialized, MedAssistRuntime, RuntimeOptions};
pub use tracing_setup::init_tracing;
