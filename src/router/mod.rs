//! # Router
//!
//! Resolves locations against the route table and loads the bound view on
//! demand.
//!
//! ```text
//!   location ──► normalize ──► RouteTable::find ──► Route
//!                                                    │
//!                         ┌──────── chunk cache ◄────┤ chunk_id()
//!                         │  hit                     │ miss
//!                         ▼                          ▼
//!                       View ◄──────────── ViewLoader::load_chunk
//! ```
//!
//! The router is built once and shared as `Arc<Router>`. The table never
//! changes after construction; only the chunk cache fills up.
//!
//! ## Modules
//!
//! - [`route`]: The `Route` binding and path normalization
//! - [`table`]: The validated, immutable `RouteTable`
//! - [`loader`]: `View`, `Chunk` and the `ViewLoader` trait
//! - [`loaders`]: Embedded and HTTP chunk sources

pub mod loader;
pub mod loaders;
pub mod route;
pub mod table;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

pub use loader::{Chunk, LoadError, View, ViewLoader};
pub use loaders::{EmbeddedLoader, HttpLoader};
pub use route::{Route, normalize_path};
pub use table::{RouteError, RouteTable};

/// Where a navigation wants to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A location path such as `/page1`.
    Path(String),
    /// A route name such as `page1`.
    Name(String),
}

impl NavigationTarget {
    /// Parses user input: anything starting with `/` is a path, the rest is a route name.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with('/') || input.is_empty() {
            NavigationTarget::Path(input.to_string())
        } else {
            NavigationTarget::Name(input.to_string())
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationTarget::Path(path) => write!(f, "{path}"),
            NavigationTarget::Name(name) => write!(f, "{name}"),
        }
    }
}

pub struct Router {
    table: RouteTable,
    loader: Arc<dyn ViewLoader>,
    cache: Mutex<HashMap<String, Arc<Chunk>>>,
}

impl Router {
    pub fn new(table: RouteTable, loader: Arc<dyn ViewLoader>) -> Self {
        info!(
            "Router ready: {} routes, loader '{}'",
            table.len(),
            loader.name()
        );
        Self {
            table,
            loader,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Finds the route a navigation target points at.
    pub fn resolve(&self, target: &NavigationTarget) -> Option<&Route> {
        let route = match target {
            NavigationTarget::Path(path) => self.table.find(path),
            NavigationTarget::Name(name) => self.table.get(name),
        };
        debug!("Resolved {:?} -> {:?}", target, route.map(|r| &r.name));
        route
    }

    /// The location a target displays as: the route's path for names,
    /// the normalized path otherwise. `None` for a name no route carries.
    pub fn location_of(&self, target: &NavigationTarget) -> Option<String> {
        match target {
            NavigationTarget::Path(path) => Some(normalize_path(path)),
            NavigationTarget::Name(name) => self.table.get(name).map(|r| normalize_path(&r.path)),
        }
    }

    /// Whether a chunk has already been fetched.
    pub fn is_cached(&self, chunk: &str) -> bool {
        self.lock_cache().contains_key(chunk)
    }

    /// Loads the view bound to `route`.
    ///
    /// The whole chunk is fetched on a cache miss, so sibling views load for
    /// free afterwards. Failures are not cached.
    pub async fn load(&self, route: &Route) -> Result<View, LoadError> {
        let chunk_id = route.chunk_id();

        let cached = self.lock_cache().get(chunk_id).cloned();
        let chunk = match cached {
            Some(chunk) => {
                debug!("Chunk '{}' served from cache", chunk_id);
                chunk
            }
            None => {
                info!(
                    "Loading chunk '{}' for route '{}' via {}",
                    chunk_id,
                    route.name,
                    self.loader.name()
                );
                let chunk = Arc::new(self.loader.load_chunk(chunk_id).await?);
                self.lock_cache()
                    .insert(chunk_id.to_string(), Arc::clone(&chunk));
                chunk
            }
        };

        chunk.view(&route.view).cloned().ok_or_else(|| {
            warn!("Chunk '{}' has no view '{}'", chunk_id, route.view);
            LoadError::MissingView {
                chunk: chunk_id.to_string(),
                view: route.view.clone(),
            }
        })
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Chunk>>> {
        // Entries are inserted whole, so a poisoned map is still consistent.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
