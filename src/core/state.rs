//! # Application State
//!
//! Core shell state for Vista. This module contains routing state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── router: Arc<Router>       // route table + chunk cache
//! ├── app_name: String          // shell title
//! ├── location: String          // current normalized location
//! ├── route_state: RouteState   // unresolved / loading / resolved / failed
//! ├── nav_id: u64               // id of the latest navigation
//! ├── history: Vec<String>      // previously visited locations (capped)
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::router::{LoadError, Router, View};

/// Oldest history entries are dropped beyond this many.
pub const HISTORY_LIMIT: usize = 100;

/// Where the shell is in mounting the current location's view.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    /// No route matched the current location. Nothing is mounted.
    Unresolved,
    /// A route matched and its view is being fetched.
    Loading { route: String },
    /// The view is mounted.
    Resolved { route: String, view: View },
    /// The view could not be loaded. Nothing is mounted.
    Failed { route: String, error: LoadError },
}

pub struct App {
    pub router: Arc<Router>,
    pub app_name: String,
    pub location: String,
    pub route_state: RouteState,
    /// Incremented on every navigation. Load results carrying an older id are stale.
    pub nav_id: u64,
    pub history: Vec<String>,
    pub status_message: String,
}

impl App {
    pub fn new(router: Arc<Router>, app_name: String) -> Self {
        Self {
            router,
            app_name,
            location: String::from("/"),
            route_state: RouteState::Unresolved,
            nav_id: 0,
            history: Vec::new(),
            status_message: String::from("Welcome to Vista!"),
        }
    }

    pub fn from_config(router: Arc<Router>, config: &ResolvedConfig) -> Self {
        Self::new(router, config.app_name.clone())
    }

    /// The view currently mounted, if any.
    pub fn mounted_view(&self) -> Option<&View> {
        match &self.route_state {
            RouteState::Resolved { view, .. } => Some(view),
            _ => None,
        }
    }

    /// Name of the route matched by the current location, mounted or not.
    pub fn active_route(&self) -> Option<&str> {
        match &self.route_state {
            RouteState::Unresolved => None,
            RouteState::Loading { route }
            | RouteState::Resolved { route, .. }
            | RouteState::Failed { route, .. } => Some(route),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.route_state, RouteState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Vista!");
        assert_eq!(app.location, "/");
        assert!(app.mounted_view().is_none());
        assert!(app.active_route().is_none());
        assert!(!app.is_loading());
        assert_eq!(app.nav_id, 0);
    }
}
