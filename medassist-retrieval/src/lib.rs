//! # medassist-retrieval
//!
//! Ranks a small, immutable clinical knowledge store against a query
//! synthesized from canonical symptoms and a diagnosis label.
//!
//! ## Pipeline
//!
//! ```text
//! symptoms + diagnosis → Query
//!   → DegradationController picks Semantic or Lexical (once per call)
//!   → score every document (semantic failure ⇒ full lexical re-score)
//!   → stable sort desc → take top_k → drop score < min_score → Snippets
//! ```

pub mod engine;
pub mod knowledge;
pub mod query;
pub mod scoring;

pub use engine::RetrievalEngine;
pub use knowledge::KnowledgeStore;
pub use query::Query;
pub use scoring::{LexicalScorer, ScoringStrategy, SemanticScorer};
