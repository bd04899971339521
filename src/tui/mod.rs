//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the shell,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loading Views
//!
//! `update()` answers a navigation with `Effect::LoadView`. The loop spawns
//! a tokio task that asks the router for the view and sends the result back
//! over a channel as `Action::ViewLoaded`. Starting a new load aborts the
//! previous one; `nav_id` filters out anything that still slips through.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod keymap;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::router::{NavigationTarget, Route, Router};
use crate::tui::component::EventHandler;
use crate::tui::components::{PathPrompt, PromptEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::keymap::{Command, browse_command};

/// TUI-specific presentation state (not part of core shell logic)
pub struct TuiState {
    /// Go-to prompt (None = hidden)
    pub prompt: Option<PathPrompt>,
}

impl TuiState {
    pub fn new() -> Self {
        Self { prompt: None }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    /// Never fails: without bracketed paste, pasted text arrives as key presses.
    fn new() -> Self {
        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => info!("Terminal modes enabled (bracketed paste)"),
            Err(e) => warn!("Could not enable bracketed paste: {}", e),
        }
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Tracks the single in-flight view load.
struct LoadSlot {
    handle: Option<tokio::task::AbortHandle>,
}

impl LoadSlot {
    fn replace(&mut self, handle: tokio::task::AbortHandle) {
        if let Some(previous) = self.handle.replace(handle) {
            debug!("Aborting superseded view load");
            previous.abort();
        }
    }
}

pub fn run(config: ResolvedConfig, router: Arc<Router>) -> std::io::Result<()> {
    let mut app = App::from_config(router, &config);
    let mut tui = TuiState::new();

    // Channel for actions from load tasks
    let (tx, rx) = mpsc::channel();
    let mut loads = LoadSlot { handle: None };

    // Initial navigation happens before the first frame.
    let effect = update(
        &mut app,
        Action::Navigate(NavigationTarget::Path(config.initial_path.clone())),
    );
    apply_effect(effect, &app, &tx, &mut loads);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            let action = if matches!(event, TuiEvent::ForceQuit) {
                Some(Action::Quit)
            } else if let Some(prompt) = tui.prompt.as_mut() {
                match prompt.handle_event(&event) {
                    Some(PromptEvent::Submit(text)) => {
                        tui.prompt = None;
                        Some(Action::Navigate(NavigationTarget::parse(&text)))
                    }
                    Some(PromptEvent::Cancel) => {
                        tui.prompt = None;
                        None
                    }
                    Some(PromptEvent::ContentChanged) | None => None,
                }
            } else {
                match browse_command(&event, &app) {
                    Some(Command::Dispatch(action)) => Some(action),
                    Some(Command::OpenPrompt) => {
                        tui.prompt = Some(PathPrompt::with_text(&app.location));
                        None
                    }
                    None => None,
                }
            };

            if let Some(action) = action {
                debug!("Dispatching {:?}", action);
                let effect = update(&mut app, action);
                if apply_effect(effect, &app, &tx, &mut loads) {
                    break 'outer;
                }
            }
        }

        // Handle load results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &tx, &mut loads) {
                break 'outer;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Performs an effect. Returns true when the shell should exit.
fn apply_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>, loads: &mut LoadSlot) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::LoadView { nav_id, route } => {
            loads.replace(spawn_load(app.router.clone(), nav_id, route, tx.clone()));
            false
        }
        Effect::None => false,
    }
}

fn spawn_load(
    router: Arc<Router>,
    nav_id: u64,
    route: Route,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning view load for route '{}' (nav {})", route.name, nav_id);
    let handle = tokio::spawn(async move {
        let result = router.load(&route).await;
        if tx
            .send(Action::ViewLoaded {
                nav_id,
                route: route.name.clone(),
                result,
            })
            .is_err()
        {
            warn!(
                "Failed to deliver view for route '{}': receiver dropped",
                route.name
            );
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_mode_guard_is_infallible() {
        // Constructing and dropping must not surface an error to `run`.
        let guard: TerminalModeGuard = TerminalModeGuard::new();
        drop(guard);
    }

    #[tokio::test]
    async fn test_load_slot_aborts_previous_load() {
        let mut slot = LoadSlot { handle: None };
        let first = tokio::spawn(std::future::pending::<()>());
        slot.replace(first.abort_handle());
        let second = tokio::spawn(std::future::pending::<()>());
        slot.replace(second.abort_handle());

        assert!(first.await.unwrap_err().is_cancelled());
        assert!(!second.is_finished());
        second.abort();
    }
}
