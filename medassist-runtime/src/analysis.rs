use medassist_core::models::{Snippet, StrategyKind};
use serde::{Deserialize, Serialize};

/// Retrieved snippets for one request, localized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// `None` when the knowledge store is empty.
    pub strategy: Option<StrategyKind>,
    /// Language the snippets were localized into.
    pub language: String,
    pub snippets: Vec<Snippet>,
}
