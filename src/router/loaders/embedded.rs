//! Views compiled into the binary.
//!
//! Chunks are assembled from the route table: every route contributes its
//! view to the chunk named by `Route::chunk_id()`. Views without a built-in
//! body are left out, so loading them reports `LoadError::MissingView`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;

use crate::router::loader::{Chunk, LoadError, View, ViewLoader};
use crate::router::table::RouteTable;

const PAGE1_BODY: &str = "This is page 1.\n\n\
    It lives in the dev-tools chunk together with page 2, so opening either \
    page fetches both.";

const PAGE2_BODY: &str = "This is page 2.\n\n\
    It was fetched along with page 1, so switching back and forth does not \
    load anything new.";

/// The views shipped with Vista.
pub fn builtin_views() -> Vec<View> {
    vec![
        View {
            id: "page1".to_string(),
            title: "Page 1".to_string(),
            body: PAGE1_BODY.to_string(),
        },
        View {
            id: "page2".to_string(),
            title: "Page 2".to_string(),
            body: PAGE2_BODY.to_string(),
        },
    ]
}

pub struct EmbeddedLoader {
    chunks: BTreeMap<String, Chunk>,
}

impl EmbeddedLoader {
    /// Group `views` into chunks following the route table.
    pub fn new(table: &RouteTable, views: Vec<View>) -> Self {
        let by_id: BTreeMap<String, View> = views.into_iter().map(|v| (v.id.clone(), v)).collect();
        let mut chunks: BTreeMap<String, Chunk> = BTreeMap::new();

        for route in table.iter() {
            let chunk = chunks.entry(route.chunk_id().to_string()).or_default();
            if let Some(view) = by_id.get(&route.view) {
                chunk.views.insert(view.id.clone(), view.clone());
            }
        }

        Self { chunks }
    }

    pub fn with_builtin_views(table: &RouteTable) -> Self {
        Self::new(table, builtin_views())
    }
}

#[async_trait]
impl ViewLoader for EmbeddedLoader {
    fn name(&self) -> &str {
        "embedded"
    }

    async fn load_chunk(&self, chunk: &str) -> Result<Chunk, LoadError> {
        debug!("Embedded loader serving chunk '{}'", chunk);
        self.chunks
            .get(chunk)
            .cloned()
            .ok_or_else(|| LoadError::UnknownChunk(chunk.to_string()))
    }
}
