use std::sync::Arc;

use medassist_core::config::RetrievalConfig;
use medassist_core::models::{Document, StrategyKind};
use medassist_embeddings::DegradationController;
use medassist_retrieval::{KnowledgeStore, RetrievalEngine};
use proptest::prelude::*;

const VOCAB: [&str; 8] = [
    "fever", "cough", "rash", "nausea", "fatigue", "dizziness", "headache", "sore throat",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(VOCAB.to_vec()).prop_map(str::to_string)
}

fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..6)
}

proptest! {
    #[test]
    fn ranking_respects_top_k_order_and_threshold(
        contents in prop::collection::vec(document(), 0..12),
        symptoms in prop::collection::vec(word(), 0..4),
        top_k in 0usize..6,
        min_score in 0.0f64..3.0,
    ) {
        let docs: Vec<Document> = contents
            .iter()
            .enumerate()
            .map(|(i, words)| Document::new(format!("d{i}"), None, words.join(" ")))
            .collect();
        let engine = RetrievalEngine::new(
            Arc::new(KnowledgeStore::new(docs)),
            Arc::new(DegradationController::disabled()),
            RetrievalConfig::default(),
            16,
        );

        let ranking = engine.rank(symptoms.as_slice(), "unmatched-dx", top_k, min_score);

        prop_assert!(ranking.snippets.len() <= top_k);
        prop_assert!(ranking.snippets.iter().all(|s| s.score >= min_score));
        prop_assert!(ranking.snippets.windows(2).all(|w| w[0].score >= w[1].score));
        if !contents.is_empty() {
            prop_assert_eq!(ranking.strategy, Some(StrategyKind::Lexical));
        }
        // Same inputs, same answer.
        prop_assert_eq!(engine.rank(symptoms.as_slice(), "unmatched-dx", top_k, min_score), ranking);
    }
}
