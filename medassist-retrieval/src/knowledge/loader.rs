//! JSON knowledge-base parsing.
//!
//! Accepts either a bare list of documents or an object wrapping them under
//! `documents`. Fields are read loosely, one document at a time: numbers and
//! booleans are rendered as text, `null` counts as absent, and `content`
//! falls back to `text` when absent or empty. An entry that is not an object
//! is skipped without affecting its neighbours.

use std::path::Path;

use medassist_core::constants::components;
use medassist_core::errors::{KnowledgeError, MedAssistResult};
use medassist_core::models::Document;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    text: Value,
    #[serde(default)]
    source: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KnowledgeFile {
    List(Vec<Value>),
    Wrapped {
        #[serde(default)]
        documents: Vec<Value>,
    },
}

/// Text of a loosely-typed field. `null` is absent.
fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl RawDocument {
    fn into_document(self) -> Document {
        let content = field_text(self.content)
            .filter(|c| !c.is_empty())
            .or_else(|| field_text(self.text))
            .unwrap_or_default();
        Document {
            id: field_text(self.id).unwrap_or_default(),
            title: field_text(self.title),
            content,
            source: field_text(self.source),
        }
    }
}

pub(crate) fn read_documents(path: &Path) -> MedAssistResult<Vec<Document>> {
    let json = std::fs::read_to_string(path).map_err(|e| KnowledgeError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_documents(&json, &path.display().to_string())
}

pub(crate) fn parse_documents(json: &str, origin: &str) -> MedAssistResult<Vec<Document>> {
    let file: KnowledgeFile =
        serde_json::from_str(json).map_err(|e| KnowledgeError::Malformed {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
    let raw = match file {
        KnowledgeFile::List(docs) => docs,
        KnowledgeFile::Wrapped { documents } => documents,
    };
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| read_entry(entry, origin, index))
        .collect())
}

fn read_entry(entry: Value, origin: &str, index: usize) -> Option<Document> {
    let reason = if entry.is_object() {
        match serde_json::from_value::<RawDocument>(entry) {
            Ok(doc) => return Some(doc.into_document()),
            Err(e) => e.to_string(),
        }
    } else {
        "not a document object".to_string()
    };
    warn!(
        component = components::KNOWLEDGE,
        origin,
        index,
        reason = %reason,
        "skipping knowledge entry"
    );
    None
}
