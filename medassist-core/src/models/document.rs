use serde::{Deserialize, Serialize};

/// A clinical knowledge document. Loaded once, read-only afterwards.
///
/// `title` and `source` stay optional here; placeholders are applied only
/// when a document is projected to a [`Snippet`](super::Snippet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    pub source: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: Option<&str>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            content: content.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Text both scoring strategies see: `"{title}. {content}"`.
    pub fn scoring_text(&self) -> String {
        format!("{}. {}", self.title.as_deref().unwrap_or(""), self.content)
    }
}
