//! # Actions
//!
//! Everything that can happen in Vista becomes an `Action`.
//! User picks a route? That's `Action::Navigate(target)`.
//! A chunk finishes loading? That's `Action::ViewLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller should
//! perform. No side effects here. Loading happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Stale loads
//!
//! Every navigation bumps `App::nav_id` and the spawned load carries that id
//! back in `ViewLoaded`. A result whose id is not the current one belongs to
//! a navigation the user already left, and is dropped.

use log::{debug, info, warn};

use crate::core::state::{App, HISTORY_LIMIT, RouteState};
use crate::router::{LoadError, NavigationTarget, Route, View};

#[derive(Debug)]
pub enum Action {
    Navigate(NavigationTarget),
    /// Return to the previous location in history.
    Back,
    /// Re-run navigation for the current location.
    Reload,
    ViewLoaded {
        nav_id: u64,
        route: String,
        result: Result<View, LoadError>,
    },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch the view for `route` and report back with `Action::ViewLoaded`.
    LoadView { nav_id: u64, route: Route },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(target) => {
            let Some(location) = app.router.location_of(&target) else {
                // Unknown route name: nothing to show in the location bar or history.
                app.nav_id += 1;
                return unresolved(app, format!("No route for {target}"));
            };
            if !location.eq_ignore_ascii_case(&app.location) {
                let previous = std::mem::replace(&mut app.location, location);
                push_history(app, previous);
            }
            enter(app, &target)
        }
        Action::Back => match app.history.pop() {
            Some(previous) => {
                app.location = previous.clone();
                enter(app, &NavigationTarget::Path(previous))
            }
            None => {
                app.status_message = "No previous location".to_string();
                Effect::None
            }
        },
        Action::Reload => {
            let target = NavigationTarget::Path(app.location.clone());
            enter(app, &target)
        }
        Action::ViewLoaded {
            nav_id,
            route,
            result,
        } => {
            if nav_id != app.nav_id {
                debug!(
                    "Dropping stale load for '{}' (nav {} superseded by {})",
                    route, nav_id, app.nav_id
                );
                return Effect::None;
            }
            match result {
                Ok(view) => {
                    info!("Mounted view '{}' for route '{}'", view.id, route);
                    app.status_message = view.title.clone();
                    app.route_state = RouteState::Resolved { route, view };
                }
                Err(error) => {
                    warn!("Failed to load route '{}': {}", route, error);
                    app.status_message = format!("Failed to load {route}: {error}");
                    app.route_state = RouteState::Failed { route, error };
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Start a navigation to `target`, whose location is already in `app.location`.
fn enter(app: &mut App, target: &NavigationTarget) -> Effect {
    app.nav_id += 1;
    let nav_id = app.nav_id;

    match app.router.resolve(target).cloned() {
        Some(route) => {
            info!("Navigating to {} (route '{}', nav {})", app.location, route.name, nav_id);
            app.status_message = format!("Loading {}...", route.name);
            app.route_state = RouteState::Loading {
                route: route.name.clone(),
            };
            Effect::LoadView { nav_id, route }
        }
        None => {
            let message = format!("No route for {}", app.location);
            unresolved(app, message)
        }
    }
}

fn unresolved(app: &mut App, message: String) -> Effect {
    info!("{} (nav {})", message, app.nav_id);
    app.status_message = message;
    app.route_state = RouteState::Unresolved;
    Effect::None
}

fn push_history(app: &mut App, location: String) {
    app.history.push(location);
    if app.history.len() > HISTORY_LIMIT {
        let excess = app.history.len() - HISTORY_LIMIT;
        app.history.drain(..excess);
    }
}
