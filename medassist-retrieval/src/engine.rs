//! RetrievalEngine: implements IRetriever over the knowledge store.
//!
//! Order of operations is fixed: score everything with one strategy, stable
//! sort descending, truncate to `top_k`, then drop scores below `min_score`.
//! Thresholding after truncation can return fewer than `top_k` snippets even
//! when more documents would have passed the threshold.

use std::sync::Arc;

use medassist_core::config::RetrievalConfig;
use medassist_core::constants::components;
use medassist_core::errors::{MedAssistResult, RetrievalError};
use medassist_core::models::{
    DegradationEvent, DegradationLog, Ranking, ScoredDocument, Snippet, StrategyKind,
};
use medassist_core::traits::IRetriever;
use medassist_embeddings::{DegradationController, EmbeddingCache};
use tracing::{debug, info, warn};

use crate::knowledge::KnowledgeStore;
use crate::query::Query;
use crate::scoring::{LexicalScorer, ScoringStrategy, SemanticScorer};

/// Ranks the knowledge store for a symptom/diagnosis query.
pub struct RetrievalEngine {
    store: Arc<KnowledgeStore>,
    controller: Arc<DegradationController>,
    embeddings: EmbeddingCache,
    config: RetrievalConfig,
    events: DegradationLog,
}

impl RetrievalEngine {
    pub fn new(
        store: Arc<KnowledgeStore>,
        controller: Arc<DegradationController>,
        config: RetrievalConfig,
        embedding_cache_capacity: u64,
    ) -> Self {
        Self {
            store,
            controller,
            embeddings: EmbeddingCache::new(embedding_cache_capacity),
            config,
            events: DegradationLog::default(),
        }
    }

    /// Rank with the configured `top_k` and `min_score`.
    pub fn rank_default<S: AsRef<str>>(&self, symptoms: &[S], primary_diagnosis: &str) -> Ranking {
        self.rank(
            symptoms,
            primary_diagnosis,
            self.config.top_k,
            self.config.min_score,
        )
    }

    /// Rank the store and report which strategy produced the scores.
    ///
    /// Never fails: semantic problems degrade to a full lexical pass.
    pub fn rank<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        primary_diagnosis: &str,
        top_k: usize,
        min_score: f64,
    ) -> Ranking {
        if self.store.is_empty() {
            debug!("knowledge store empty, skipping retrieval");
            return Ranking::empty();
        }

        let query = Query::new(symptoms, primary_diagnosis);
        let (strategy, mut scored) = self.score_documents(&query);

        // `sort_by` is stable: equal scores keep load order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);

        let snippets: Vec<Snippet> = scored
            .iter()
            .filter(|s| s.score >= min_score)
            .map(|s| {
                Snippet::from_scored(s, &self.config.default_title, &self.config.default_source)
            })
            .collect();

        info!(
            strategy = %strategy,
            documents = self.store.len(),
            returned = snippets.len(),
            top_k,
            min_score,
            "retrieval complete"
        );

        Ranking {
            strategy: Some(strategy),
            snippets,
        }
    }

    /// Score every document with a single strategy.
    fn score_documents(&self, query: &Query) -> (StrategyKind, Vec<ScoredDocument<'_>>) {
        if let Some(encoder) = self.controller.encoder() {
            let scorer = SemanticScorer::new(encoder, &self.embeddings);
            debug!(encoder = scorer.encoder_name(), "scoring semantically");
            let strategy = ScoringStrategy::Semantic(scorer);
            match self.score_all(&strategy, query) {
                Ok(scored) => return (strategy.kind(), scored),
                Err(e) => {
                    let failure = RetrievalError::ScoringFailed {
                        strategy: StrategyKind::Semantic.to_string(),
                        reason: e.to_string(),
                    };
                    warn!(
                        error = %failure,
                        "semantic scoring failed, re-scoring all documents lexically"
                    );
                    self.record(DegradationEvent::now(
                        components::RETRIEVAL,
                        failure.to_string(),
                        StrategyKind::Lexical.as_str(),
                    ));
                }
            }
        }
        let strategy = ScoringStrategy::Lexical(LexicalScorer);
        let scored = self.score_all(&strategy, query).unwrap_or_else(|e| {
            warn!(error = %e, "lexical scoring failed, returning no candidates");
            Vec::new()
        });
        (strategy.kind(), scored)
    }

    fn score_all(
        &self,
        strategy: &ScoringStrategy<'_>,
        query: &Query,
    ) -> MedAssistResult<Vec<ScoredDocument<'_>>> {
        self.store
            .documents()
            .iter()
            .map(|document| {
                Ok(ScoredDocument {
                    score: strategy.score(query, document)?,
                    document,
                })
            })
            .collect()
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

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn controller(&self) -> &DegradationController {
        &self.controller
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }
}

impl IRetriever for RetrievalEngine {
    fn retrieve(
        &self,
        symptoms: &[String],
        primary_diagnosis: &str,
        top_k: usize,
        min_score: f64,
    ) -> MedAssistResult<Vec<Snippet>> {
        if !min_score.is_finite() {
            return Err(RetrievalError::InvalidParameter {
                name: "min_score".to_string(),
                reason: format!("must be finite, got {min_score}"),
            }
            .into());
        }
        Ok(self
            .rank(symptoms, primary_diagnosis, top_k, min_score)
            .snippets)
    }
}
