//! # Route Table
//!
//! The ordered, immutable set of routes the router resolves against.
//!
//! A table can only be obtained through [`RouteTableBuilder::build`], which
//! validates every route up front. There is no way to add routes afterwards.

use std::collections::HashSet;
use std::fmt;

use super::route::{Route, normalize_path};

/// Chunk shared by the default views, so both are fetched on first navigation.
pub const DEFAULT_CHUNK: &str = "dev-tools";

/// Problems found while building a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The table has no routes at all.
    Empty,
    /// Two routes share a name. Names are navigation targets and must be unique.
    DuplicateName(String),
    /// A route path is empty or does not start with `/`.
    InvalidPath { name: String, path: String },
    /// A route has an empty name or view id.
    MissingField { path: String, field: &'static str },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Empty => write!(f, "route table is empty"),
            RouteError::DuplicateName(name) => write!(f, "duplicate route name: {name}"),
            RouteError::InvalidPath { name, path } => {
                write!(f, "route '{name}' has invalid path '{path}' (must start with '/')")
            }
            RouteError::MissingField { path, field } => {
                write!(f, "route at '{path}' is missing a {field}")
            }
        }
    }
}

impl std::error::Error for RouteError {}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The built-in table: `/page1` and `/page2`, both in [`DEFAULT_CHUNK`].
    pub fn default_routes() -> Vec<Route> {
        vec![
            Route::new("/page1", "page1", "page1").in_chunk(DEFAULT_CHUNK),
            Route::new("/page2", "page2", "page2").in_chunk(DEFAULT_CHUNK),
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route at a position in declaration order.
    pub fn at(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Position of a route in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.name == name)
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// First route whose path matches `location`. Earlier routes shadow later
    /// ones with the same path.
    pub fn find(&self, location: &str) -> Option<&Route> {
        let location = normalize_path(location);
        self.routes.iter().find(|r| r.matches(&location))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: Self::default_routes(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Validate and freeze the table. Reports every problem, not just the first.
    pub fn build(self) -> Result<RouteTable, Vec<RouteError>> {
        if self.routes.is_empty() {
            return Err(vec![RouteError::Empty]);
        }

        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for route in &self.routes {
            if route.name.trim().is_empty() {
                errors.push(RouteError::MissingField {
                    path: route.path.clone(),
                    field: "name",
                });
            } else if !seen.insert(route.name.as_str()) {
                errors.push(RouteError::DuplicateName(route.name.clone()));
            }

            if route.view.trim().is_empty() {
                errors.push(RouteError::MissingField {
                    path: route.path.clone(),
                    field: "view",
                });
            }

            if !route.path.starts_with('/') {
                errors.push(RouteError::InvalidPath {
                    name: route.name.clone(),
                    path: route.path.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(RouteTable { routes: self.routes })
        } else {
            Err(errors)
        }
    }
}
