//! Chunk loader fetching views from a static file server.
//!
//! Each chunk is a JSON document at `{base_url}/{chunk}.json`:
//!
//! ```json
//! { "views": { "page1": { "id": "page1", "title": "Page 1", "body": "..." } } }
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::router::loader::{Chunk, LoadError, ViewLoader};

pub struct HttpLoader {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn chunk_url(&self, chunk: &str) -> String {
        format!("{}/{}.json", self.base_url, chunk)
    }
}

#[async_trait]
impl ViewLoader for HttpLoader {
    fn name(&self) -> &str {
        "http"
    }

    async fn load_chunk(&self, chunk: &str) -> Result<Chunk, LoadError> {
        let url = self.chunk_url(chunk);
        info!("Fetching chunk '{}' from {}", chunk, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        debug!("Chunk response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Chunk '{}' request failed with HTTP {}", chunk, status);
            return Err(LoadError::Status {
                status,
                chunk: chunk.to_string(),
            });
        }

        let parsed: Chunk = response.json().await.map_err(|e| {
            if e.is_decode() {
                LoadError::Parse(e.to_string())
            } else {
                LoadError::Network(e.to_string())
            }
        })?;
        debug!("Chunk '{}' delivered {} views", chunk, parsed.views.len());
        Ok(parsed)
    }
}
