//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::router::{Chunk, EmbeddedLoader, LoadError, RouteTable, Router, ViewLoader};

/// Embedded loader that counts how many chunk fetches reach it.
pub struct CountingLoader {
    inner: EmbeddedLoader,
    calls: AtomicUsize,
}

impl CountingLoader {
    pub fn new(table: &RouteTable) -> Self {
        Self {
            inner: EmbeddedLoader::with_builtin_views(table),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewLoader for CountingLoader {
    fn name(&self) -> &str {
        "counting"
    }

    async fn load_chunk(&self, chunk: &str) -> Result<Chunk, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.load_chunk(chunk).await
    }
}

/// A loader whose every fetch fails, like an unreachable chunk server.
pub struct FailingLoader;

#[async_trait]
impl ViewLoader for FailingLoader {
    fn name(&self) -> &str {
        "failing"
    }

    async fn load_chunk(&self, _chunk: &str) -> Result<Chunk, LoadError> {
        Err(LoadError::Network("connection refused".to_string()))
    }
}

/// Creates a router over the default table with the built-in views.
pub fn test_router() -> Router {
    let table = RouteTable::default();
    let loader = Arc::new(EmbeddedLoader::with_builtin_views(&table));
    Router::new(table, loader)
}

/// Creates a test App at the root location with nothing mounted.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(test_router()), "Vista".to_string())
}
