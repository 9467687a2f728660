use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Document, Snippet};

/// Which scoring strategy produced a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Dense-embedding cosine similarity.
    Semantic,
    /// Keyword overlap count.
    Lexical,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Lexical => "lexical",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document paired with its score. Lives only while ranking.
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument<'a> {
    pub score: f64,
    pub document: &'a Document,
}

/// Result of one retrieval call. Every snippet was scored by `strategy`;
/// `strategy` is `None` when nothing was scored (empty knowledge store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub strategy: Option<StrategyKind>,
    pub snippets: Vec<Snippet>,
}

impl Ranking {
    pub fn empty() -> Self {
        Self {
            strategy: None,
            snippets: Vec::new(),
        }
    }
}
