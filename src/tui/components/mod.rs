//! # TUI Components
//!
//! This module contains all UI components for the terminal shell.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with shell name, location and status
//! - `NavBar`: Route list with number keys and the active route
//! - `ViewPane`: The outlet the routed view mounts into
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `PathPrompt`: "Go to" input that emits a submitted path or name
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! ViewPane::new(&app.route_state, &app.location, spinner_frame).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── nav_bar.rs       (Route list)
//! ├── view_pane.rs     (Mounted view)
//! └── path_prompt.rs   (Go-to input)
//! ```

mod nav_bar;
mod path_prompt;
mod title_bar;
mod view_pane;

pub use nav_bar::NavBar;
pub use path_prompt::{PathPrompt, PromptEvent};
pub use title_bar::TitleBar;
pub use view_pane::ViewPane;
