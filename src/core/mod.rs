//! # Core Application Logic
//!
//! This module contains Vista's shell logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │   Router   │
//!         │  Adapter   │                  │  (loads    │
//!         │ (ratatui)  │                  │   views)   │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all shell state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Layered settings and router construction

pub mod action;
pub mod config;
pub mod state;
