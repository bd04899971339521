use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A loaded view, ready to mount in the shell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A group of views delivered by one fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    pub views: BTreeMap<String, View>,
}

impl Chunk {
    pub fn with_views(views: impl IntoIterator<Item = View>) -> Self {
        Self {
            views: views.into_iter().map(|v| (v.id.clone(), v)).collect(),
        }
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.get(id)
    }
}

/// Errors that can occur while fetching a view's chunk.
/// None of them are retried; the shell reports them and stays unmounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport failure (connection refused, timeout, DNS).
    Network(String),
    /// The chunk source answered with a non-success status.
    Status { status: u16, chunk: String },
    /// The chunk payload could not be decoded.
    Parse(String),
    /// The chunk loaded but does not contain the requested view.
    MissingView { chunk: String, view: String },
    /// No chunk with this id exists.
    UnknownChunk(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
            LoadError::Status { status, chunk } => {
                write!(f, "chunk '{chunk}' failed to load (HTTP {status})")
            }
            LoadError::Parse(msg) => write!(f, "parse error: {msg}"),
            LoadError::MissingView { chunk, view } => {
                write!(f, "view '{view}' not found in chunk '{chunk}'")
            }
            LoadError::UnknownChunk(chunk) => write!(f, "unknown chunk '{chunk}'"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Source of deferred view code.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    /// Returns the name of the loader, for logs.
    fn name(&self) -> &str;

    /// Fetches every view belonging to `chunk`.
    async fn load_chunk(&self, chunk: &str) -> Result<Chunk, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_with_views_indexes_by_id() {
        let chunk = Chunk::with_views([
            View {
                id: "a".into(),
                title: "A".into(),
                body: String::new(),
            },
            View {
                id: "b".into(),
                title: "B".into(),
                body: "bee".into(),
            },
        ]);
        assert_eq!(chunk.views.len(), 2);
        assert_eq!(chunk.view("b").map(|v| v.body.as_str()), Some("bee"));
        assert!(chunk.view("c").is_none());
    }

    #[test]
    fn test_chunk_json_body_is_optional() {
        let json = r#"{"views":{"page1":{"id":"page1","title":"Page 1"}}}"#;
        let chunk: Chunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.view("page1").map(|v| v.body.as_str()), Some(""));
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::Status {
            status: 404,
            chunk: "dev-tools".into(),
        };
        assert_eq!(err.to_string(), "chunk 'dev-tools' failed to load (HTTP 404)");
    }
}
