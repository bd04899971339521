use serde::{Deserialize, Serialize};

/// A binding from a location path to a lazily loaded view.
///
/// `chunk` groups views that are fetched together. When unset, the route
/// is its own chunk, keyed by its name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub view: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk: Option<String>,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
            chunk: None,
        }
    }

    /// Place this route's view into a shared chunk.
    pub fn in_chunk(mut self, chunk: impl Into<String>) -> Self {
        self.chunk = Some(chunk.into());
        self
    }

    /// The chunk this route's view is fetched with.
    pub fn chunk_id(&self) -> &str {
        self.chunk.as_deref().unwrap_or(&self.name)
    }

    /// Matches an already-normalized location segment by segment.
    ///
    /// Static segments compare case-insensitively. A `:name` segment
    /// matches any single non-empty segment.
    pub fn matches(&self, location: &str) -> bool {
        let pattern = normalize_path(&self.path);
        let mut expected = pattern.split('/');
        let mut actual = location.split('/');
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), Some(s)) if p.starts_with(':') && !s.is_empty() => {}
                (Some(p), Some(s)) if p.eq_ignore_ascii_case(s) => {}
                _ => return false,
            }
        }
    }
}

/// Normalizes a location for matching.
///
/// Hash locations (`#/page1`, `/#/page1`) use the fragment as the path.
/// Otherwise the query string and fragment are stripped. A trailing `/` is
/// dropped (except for the root) and an empty location maps to `/`.
pub fn normalize_path(location: &str) -> String {
    let location = location.trim();
    let location = location
        .strip_prefix("/#")
        .or_else(|| location.strip_prefix('#'))
        .unwrap_or(location);
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim();

    if path.is_empty() {
        return "/".to_string();
    }

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
