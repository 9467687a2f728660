/// A retrieval query, built fresh for each call.
///
/// `text` feeds the semantic encoder; `tokens` (each symptom plus the
/// diagnosis label, unsplit) feed keyword overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub text: String,
    pub tokens: Vec<String>,
}

impl Query {
    pub fn new<S: AsRef<str>>(symptoms: &[S], primary_diagnosis: &str) -> Self {
        let joined = symptoms
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");
        let text = format!("Symptoms: {joined}. Likely diagnosis: {primary_diagnosis}.");

        let tokens = symptoms
            .iter()
            .map(|s| s.as_ref().to_string())
            .chain(std::iter::once(primary_diagnosis.to_string()))
            .collect();

        Self { text, tokens }
    }
}
