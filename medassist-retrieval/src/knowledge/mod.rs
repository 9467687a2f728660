//! In-memory knowledge store. Loaded once at startup, immutable afterwards.

mod loader;

use std::path::Path;

use medassist_core::constants::components;
use medassist_core::errors::MedAssistResult;
use medassist_core::models::Document;
use tracing::{info, warn};

/// Read-only collection of knowledge documents in load order.
///
/// Duplicate ids are kept; load order is the tie-break when ranking.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    documents: Vec<Document>,
}

impl KnowledgeStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from a JSON file. A missing file is an empty store, not an error.
    ///
    /// # Errors
    /// `KnowledgeError::ReadFailed` if the file exists but cannot be read,
    /// `KnowledgeError::Malformed` if it is not a document list or a
    /// `{"documents": [...]}` wrapper.
    pub fn load(path: &Path) -> MedAssistResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "knowledge base not found, using empty store");
            return Ok(Self::empty());
        }
        let documents = loader::read_documents(path)?;
        info!(
            path = %path.display(),
            documents = documents.len(),
            "knowledge base loaded"
        );
        Ok(Self::new(documents))
    }

    /// Like [`KnowledgeStore::load`], but any failure degrades to an empty store.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    component = components::KNOWLEDGE,
                    path = %path.display(),
                    error = %e,
                    "failed to load knowledge base, using empty store"
                );
                Self::empty()
            }
        }
    }

    /// Parse documents from a JSON string. `origin` is used in error messages.
    pub fn from_json_str(json: &str, origin: &str) -> MedAssistResult<Self> {
        Ok(Self::new(loader::parse_documents(json, origin)?))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
