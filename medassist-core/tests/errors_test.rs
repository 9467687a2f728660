use medassist_core::errors::*;

#[test]
fn unsupported_direction_carries_both_languages() {
    let err = TranslationError::UnsupportedDirection {
        from: "en".into(),
        to: "fr".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("en"));
    assert!(msg.contains("fr"));
}

#[test]
fn model_load_failure_carries_path_and_reason() {
    let err = EmbeddingError::ModelLoadFailed {
        path: "/models/biobert".into(),
        reason: "model file not found".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/models/biobert"));
    assert!(msg.contains("model file not found"));
}

#[test]
fn subsystem_errors_convert_into_top_level() {
    let err: MedAssistError = EmbeddingError::InferenceFailed {
        reason: "shape mismatch".into(),
    }
    .into();
    assert!(matches!(err, MedAssistError::Embedding(_)));
    assert!(err.to_string().contains("shape mismatch"));

    let err: MedAssistError = TranslationError::Disabled.into();
    assert!(matches!(err, MedAssistError::Translation(_)));

    let err: MedAssistError = KnowledgeError::Malformed {
        path: "kb.json".into(),
        reason: "expected array".into(),
    }
    .into();
    assert!(matches!(err, MedAssistError::Knowledge(_)));
}
