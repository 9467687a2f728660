use medassist_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MedAssistConfig::from_toml("").unwrap();

    // Knowledge defaults
    assert_eq!(config.knowledge.path, "knowledge_base.json");

    // Retrieval defaults
    assert_eq!(config.retrieval.top_k, 3);
    assert_eq!(config.retrieval.min_score, 0.2);
    assert_eq!(config.retrieval.default_title, "Practice tip");
    assert_eq!(config.retrieval.default_source, "Offline ruleset");

    // Embedding defaults
    assert!(config.embedding.enabled);
    assert!(config.embedding.model_dir.is_none());
    assert_eq!(config.embedding.max_seq_len, 256);
    assert!(config.embedding.token_type_ids);

    // Translation defaults
    assert!(config.translation.enabled);
    assert!(config.translation.models_dir.is_none());
    assert_eq!(config.translation.num_beams, 4);
    assert_eq!(config.translation.max_new_tokens, 128);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.max_degradation_events, 256);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[knowledge]
path = "/srv/medassist/kb.json"

[retrieval]
top_k = 5

[translation]
models_dir = "/srv/models"
num_beams = 2
"#;
    let config = MedAssistConfig::from_toml(toml).unwrap();
    assert_eq!(config.knowledge.path, "/srv/medassist/kb.json");
    assert_eq!(config.retrieval.top_k, 5);
    // Non-overridden fields keep defaults
    assert_eq!(config.retrieval.min_score, 0.2);
    assert_eq!(config.translation.models_dir.as_deref(), Some("/srv/models"));
    assert_eq!(config.translation.num_beams, 2);
    assert_eq!(config.translation.max_new_tokens, 128);
}

#[test]
fn config_rejects_zero_top_k() {
    let err = MedAssistConfig::from_toml("[retrieval]\ntop_k = 0\n").unwrap_err();
    assert!(err.to_string().contains("retrieval.top_k"));
}

#[test]
fn config_rejects_zero_beams() {
    let err = MedAssistConfig::from_toml("[translation]\nnum_beams = 0\n").unwrap_err();
    assert!(err.to_string().contains("translation.num_beams"));
}

#[test]
fn config_rejects_zero_event_capacity() {
    let err = MedAssistConfig::from_toml("[observability]\nmax_degradation_events = 0\n")
        .unwrap_err();
    assert!(err.to_string().contains("observability.max_degradation_events"));
}

#[test]
fn config_reports_parse_errors() {
    let err = MedAssistConfig::from_toml("[retrieval\ntop_k = ").unwrap_err();
    assert!(matches!(err, medassist_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = MedAssistConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = MedAssistConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.knowledge.path, config.knowledge.path);
    assert_eq!(roundtripped.retrieval.top_k, config.retrieval.top_k);
    assert_eq!(
        roundtripped.translation.max_new_tokens,
        config.translation.max_new_tokens
    );
}

#[test]
fn config_from_missing_file_is_parse_error() {
    let err = MedAssistConfig::from_file(std::path::Path::new("/nonexistent/medassist.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/medassist.toml"));
}
