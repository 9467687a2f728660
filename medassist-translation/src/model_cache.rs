//! Lazily-populated, per-direction translation model cache.
//!
//! Each supported direction is loaded on first use and kept for the life of
//! the process. Concurrent first requests for the same cold direction share
//! a single load through moka's `try_get_with` coalescing. A failed load is
//! returned to every waiter of that attempt and is not cached, so a later
//! call tries again.

use std::sync::Arc;

use medassist_core::errors::{MedAssistError, MedAssistResult, TranslationError};
use medassist_core::models::{Language, TranslationDirection, SUPPORTED_DIRECTIONS};
use medassist_core::traits::{ITranslationBackend, ITranslationLoader};
use moka::sync::Cache;
use tracing::{debug, info};

/// Per-direction backend cache in front of an [`ITranslationLoader`].
pub struct ModelCache {
    loader: Arc<dyn ITranslationLoader>,
    backends: Cache<TranslationDirection, Arc<dyn ITranslationBackend>>,
}

impl ModelCache {
    pub fn new(loader: Arc<dyn ITranslationLoader>) -> Self {
        Self {
            loader,
            backends: Cache::builder()
                .max_capacity(SUPPORTED_DIRECTIONS.len() as u64)
                .build(),
        }
    }

    /// Backend for `direction`, loading it on first use.
    ///
    /// # Errors
    /// `TranslationError::UnsupportedDirection` for pairs outside the
    /// supported set; otherwise whatever the loader reported.
    pub fn resolve(
        &self,
        direction: TranslationDirection,
    ) -> MedAssistResult<Arc<dyn ITranslationBackend>> {
        if !direction.is_supported() {
            return Err(TranslationError::UnsupportedDirection {
                from: direction.source.code().to_string(),
                to: direction.target.code().to_string(),
            }
            .into());
        }

        if let Some(backend) = self.backends.get(&direction) {
            return Ok(backend);
        }

        self.backends
            .try_get_with(direction, || {
                info!(direction = %direction, "translation model cache miss");
                self.loader.load(direction)
            })
            .map_err(|shared: Arc<MedAssistError>| {
                Arc::try_unwrap(shared).unwrap_or_else(|shared| {
                    TranslationError::ModelLoadFailed {
                        direction: direction.to_string(),
                        reason: shared.to_string(),
                    }
                    .into()
                })
            })
    }

    /// Resolve by language codes, e.g. `("en", "hi")`.
    pub fn resolve_codes(
        &self,
        source: &str,
        target: &str,
    ) -> MedAssistResult<Arc<dyn ITranslationBackend>> {
        match (Language::from_code(source), Language::from_code(target)) {
            (Some(s), Some(t)) => self.resolve(TranslationDirection::new(s, t)),
            _ => Err(TranslationError::UnsupportedDirection {
                from: source.to_string(),
                to: target.to_string(),
            }
            .into()),
        }
    }

    /// Whether `direction` is already loaded. Never triggers a load.
    pub fn is_loaded(&self, direction: TranslationDirection) -> bool {
        self.backends.contains_key(&direction)
    }

    /// Directions currently held, in a stable order.
    pub fn loaded_directions(&self) -> Vec<TranslationDirection> {
        self.backends.run_pending_tasks();
        let mut directions: Vec<TranslationDirection> =
            self.backends.iter().map(|(direction, _)| *direction).collect();
        directions.sort();
        directions
    }

    /// Drop every loaded backend.
    pub fn clear(&self) {
        debug!("clearing translation model cache");
        self.backends.invalidate_all();
        self.backends.run_pending_tasks();
    }
}
