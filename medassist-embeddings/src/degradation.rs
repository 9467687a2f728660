//! Process-wide availability of the semantic backend.
//!
//! State machine: `unknown → available` or `unknown → unavailable`.
//! The load is attempted once, under the write lock, so concurrent first
//! requests wait for a single attempt and share its outcome. Nothing moves
//! the state back to `unknown` except an explicit [`DegradationController::reset`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use medassist_core::config::EmbeddingConfig;
use medassist_core::constants::components;
use medassist_core::errors::{EmbeddingError, MedAssistResult};
use medassist_core::models::{DegradationEvent, DegradationLog, SemanticStatus, StrategyKind};
use medassist_core::traits::ISemanticEncoder;
use tracing::{info, warn};

use crate::providers;

type EncoderLoader = Box<dyn Fn() -> MedAssistResult<Arc<dyn ISemanticEncoder>> + Send + Sync>;

enum Availability {
    Unknown,
    Available(Arc<dyn ISemanticEncoder>),
    Unavailable(String),
}

/// Decides, once per process, whether semantic scoring can be used.
pub struct DegradationController {
    state: RwLock<Availability>,
    loader: EncoderLoader,
    load_attempts: AtomicUsize,
    events: DegradationLog,
}

impl DegradationController {
    /// Create a controller that materializes its encoder with `loader` on first use.
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> MedAssistResult<Arc<dyn ISemanticEncoder>> + Send + Sync + 'static,
    {
        Self {
            state: RwLock::new(Availability::Unknown),
            loader: Box::new(loader),
            load_attempts: AtomicUsize::new(0),
            events: DegradationLog::default(),
        }
    }

    /// Controller backed by the configured ONNX encoder.
    pub fn from_config(config: &EmbeddingConfig) -> Self {
        let config = config.clone();
        Self::new(move || providers::create_encoder(&config))
    }

    /// Controller whose backend is never available.
    pub fn disabled() -> Self {
        Self::new(|| Err(EmbeddingError::Disabled.into()))
    }

    /// The loaded encoder, attempting the load if the state is still unknown.
    pub fn encoder(&self) -> Option<Arc<dyn ISemanticEncoder>> {
        {
            let state = self.state.read().unwrap_or_else(|e| e.into_inner());
            match &*state {
                Availability::Available(encoder) => return Some(Arc::clone(encoder)),
                Availability::Unavailable(_) => return None,
                Availability::Unknown => {}
            }
        }

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have finished the load while we waited.
        if matches!(*state, Availability::Unknown) {
            *state = self.attempt_load();
        }
        match &*state {
            Availability::Available(encoder) => Some(Arc::clone(encoder)),
            _ => None,
        }
    }

    fn attempt_load(&self) -> Availability {
        let attempt = self.load_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        info!(attempt, "loading semantic backend");
        match (self.loader)() {
            Ok(encoder) => {
                info!(encoder = encoder.name(), "semantic backend available");
                Availability::Available(encoder)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "semantic backend unavailable, falling back to lexical scoring"
                );
                self.record(DegradationEvent::now(
                    components::SEMANTIC_BACKEND,
                    e.to_string(),
                    StrategyKind::Lexical.as_str(),
                ));
                Availability::Unavailable(e.to_string())
            }
        }
    }

    /// Whether semantic scoring is usable. Triggers the one-time load if needed.
    pub fn is_semantic_available(&self) -> bool {
        self.encoder().is_some()
    }

    /// Current state without triggering a load.
    pub fn status(&self) -> SemanticStatus {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        match &*state {
            Availability::Unknown => SemanticStatus::Unknown,
            Availability::Available(encoder) => SemanticStatus::Available {
                encoder: encoder.name().to_string(),
            },
            Availability::Unavailable(reason) => SemanticStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    /// Forget the decision so the next request attempts the load again.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = Availability::Unknown;
        info!("semantic backend state reset");
    }

    /// How many times the loader has run.
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::SeqCst)
    }

    /// Bound the number of buffered degradation events; the oldest are evicted first.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.events = DegradationLog::new(capacity);
        self
    }

    fn record(&self, event: DegradationEvent) {
        self.events.record(event);
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.events.drain()
    }
}
