//! MedAssistRuntime: owns the retrieval and translation core.
//!
//! The runtime is a singleton stored behind `OnceLock`. It's initialized once
//! via `initialize()` and accessed via `get()` for the lifetime of the process.
//! Backends load lazily on first use, so initialization itself is cheap.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use medassist_core::config::MedAssistConfig;
use medassist_core::constants::VERSION;
use medassist_core::errors::{MedAssistError, MedAssistResult};
use medassist_core::models::{HealthReport, Ranking};
use medassist_core::traits::ITranslator;
use medassist_embeddings::DegradationController;
use medassist_retrieval::{KnowledgeStore, RetrievalEngine};
use medassist_translation::{Localize, TranslationGateway};
use tracing::{info, info_span};

use crate::analysis::Analysis;
use crate::tracing_setup;

/// Global singleton.
static RUNTIME: OnceLock<Arc<MedAssistRuntime>> = OnceLock::new();

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. Takes precedence over `config_path`.
    pub config_toml: Option<String>,
    /// Path to a TOML configuration file. If both are None, uses defaults.
    pub config_path: Option<PathBuf>,
    /// Overrides `knowledge.path` from the configuration.
    pub knowledge_path: Option<PathBuf>,
}

pub struct MedAssistRuntime {
    engine: RetrievalEngine,
    gateway: TranslationGateway,
    config: MedAssistConfig,
}

impl MedAssistRuntime {
    /// Build a runtime from options. Does not touch the global singleton.
    ///
    /// # Errors
    /// Only configuration errors. A missing or malformed knowledge base
    /// degrades to an empty store.
    pub fn new(opts: RuntimeOptions) -> MedAssistResult<Self> {
        let config = match (&opts.config_toml, &opts.config_path) {
            (Some(toml_str), _) => MedAssistConfig::from_toml(toml_str)?,
            (None, Some(path)) => MedAssistConfig::from_file(path)?,
            (None, None) => MedAssistConfig::default(),
        };

        let knowledge_path = opts
            .knowledge_path
            .unwrap_or_else(|| PathBuf::from(&config.knowledge.path));
        let store = KnowledgeStore::load_or_empty(&knowledge_path);

        let event_capacity = config.observability.max_degradation_events;
        let controller = DegradationController::from_config(&config.embedding)
            .with_event_capacity(event_capacity);
        let gateway = TranslationGateway::from_config(&config.translation)
            .with_event_capacity(event_capacity);

        Ok(Self::from_parts(config, store, controller, gateway))
    }

    /// Assemble a runtime from already-built parts.
    pub fn from_parts(
        config: MedAssistConfig,
        store: KnowledgeStore,
        controller: DegradationController,
        gateway: TranslationGateway,
    ) -> Self {
        let engine = RetrievalEngine::new(
            Arc::new(store),
            Arc::new(controller),
            config.retrieval.clone(),
            config.embedding.cache_capacity,
        )
        .with_event_capacity(config.observability.max_degradation_events);
        info!(
            version = VERSION,
            knowledge_documents = engine.store().len(),
            translation_enabled = gateway.is_enabled(),
            "medassist runtime ready"
        );
        Self {
            engine,
            gateway,
            config,
        }
    }

    /// Rank knowledge snippets with explicit limits.
    pub fn retrieve<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        primary_diagnosis: &str,
        top_k: usize,
        min_score: f64,
    ) -> Ranking {
        self.engine
            .rank(symptoms, primary_diagnosis, top_k, min_score)
    }

    /// Retrieve with the configured limits and localize into `target_lang`.
    pub fn analyze<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        primary_diagnosis: &str,
        target_lang: &str,
    ) -> Analysis {
        let _span = info_span!("medassist.analyze", target_lang).entered();
        let ranking = self.engine.rank_default(symptoms, primary_diagnosis);
        Analysis {
            strategy: ranking.strategy,
            language: target_lang.to_string(),
            snippets: ranking.snippets.localize(&self.gateway, target_lang),
        }
    }

    /// Localize any display value into `target_lang`.
    pub fn localize<T: Localize>(&self, value: &T, target_lang: &str) -> T {
        value.localize(&self.gateway, target_lang)
    }

    /// Translate one string; never fails.
    pub fn translate(&self, text: &str, target_lang: &str) -> String {
        self.gateway.translate(text, target_lang)
    }

    /// Snapshot of backend state. Drains pending degradation events.
    pub fn health(&self) -> HealthReport {
        let mut degradation_events = self.engine.controller().drain_events();
        degradation_events.extend(self.engine.drain_events());
        degradation_events.extend(self.gateway.drain_events());
        degradation_events.sort_by_key(|e| e.timestamp);

        HealthReport {
            knowledge_documents: self.engine.store().len(),
            semantic: self.engine.controller().status(),
            translation_enabled: self.gateway.is_enabled(),
            loaded_directions: self.gateway.loaded_directions(),
            degradation_events,
        }
    }

    pub fn engine(&self) -> &RetrievalEngine {
        &self.engine
    }

    pub fn gateway(&self) -> &TranslationGateway {
        &self.gateway
    }

    pub fn config(&self) -> &MedAssistConfig {
        &self.config
    }
}

/// Initialize the global MedAssistRuntime singleton and its tracing subscriber.
///
/// Returns an error if already initialized or if the configuration is invalid.
pub fn initialize(opts: RuntimeOptions) -> MedAssistResult<Arc<MedAssistRuntime>> {
    if RUNTIME.get().is_some() {
        return Err(MedAssistError::RuntimeAlreadyInitialized);
    }
    let runtime = MedAssistRuntime::new(opts)?;
    tracing_setup::init_tracing(&runtime.config.observability.log_level);

    let runtime = Arc::new(runtime);
    RUNTIME
        .set(Arc::clone(&runtime))
        .map_err(|_| MedAssistError::RuntimeAlreadyInitialized)?;
    Ok(runtime)
}

/// Get a reference to the global MedAssistRuntime.
///
/// Returns an error if not yet initialized.
pub fn get() -> MedAssistResult<Arc<MedAssistRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or(MedAssistError::RuntimeNotInitialized)
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
