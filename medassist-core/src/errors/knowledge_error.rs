/// Knowledge base loading errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge base {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("malformed knowledge base {path}: {reason}")]
    Malformed { path: String, reason: String },
}
