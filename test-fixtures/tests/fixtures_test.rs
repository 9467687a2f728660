use test_fixtures::*;

#[test]
fn clinical_kb_fixture_exists_and_is_a_list() {
    assert!(fixture_exists(CLINICAL_KB));
    let value = load_fixture_value(CLINICAL_KB);
    assert_eq!(value.as_array().map(Vec::len), Some(5));
}

#[test]
fn wrapped_kb_fixture_has_documents_key() {
    let value = load_fixture_value(WRAPPED_KB);
    assert_eq!(value["documents"].as_array().map(Vec::len), Some(2));
}

#[test]
fn fixture_path_is_absolute() {
    assert!(fixture_path(CLINICAL_KB).is_absolute());
}

#[test]
fn fixtures_load_as_text_and_typed_values() {
    assert!(load_fixture_str(WRAPPED_KB).contains("\"documents\""));
    let docs: Vec<serde_json::Value> = load_fixture(CLINICAL_KB);
    assert_eq!(docs[0]["id"], "kb-fever-01");
}
