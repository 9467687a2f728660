//! Scoring strategies. One is chosen per retrieval call, never per document.
//!
//! Semantic scores are bounded cosine similarities; lexical scores are
//! unbounded match counts. The two scales are not comparable.

mod lexical;
mod semantic;

pub use lexical::LexicalScorer;
pub use semantic::SemanticScorer;

use medassist_core::errors::MedAssistResult;
use medassist_core::models::{Document, StrategyKind};

use crate::query::Query;

/// The active scoring strategy for one retrieval call.
pub enum ScoringStrategy<'a> {
    Semantic(SemanticScorer<'a>),
    Lexical(LexicalScorer),
}

impl ScoringStrategy<'_> {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Semantic(_) => StrategyKind::Semantic,
            Self::Lexical(_) => StrategyKind::Lexical,
        }
    }

    /// Relevance of `document` to `query`.
    pub fn score(&self, query: &Query, document: &Document) -> MedAssistResult<f64> {
        match self {
            Self::Semantic(scorer) => scorer.score(query, document),
            Self::Lexical(scorer) => Ok(scorer.score(query, document)),
        }
    }
}
