//! Browse-mode key bindings.
//!
//! | Key               | Command                          |
//! |-------------------|----------------------------------|
//! | `1`…`9`           | navigate to the n-th route       |
//! | `Tab`             | navigate to the next route       |
//! | `:` / `g`         | open the go-to prompt            |
//! | `b` / Backspace   | back                             |
//! | `r`               | reload the current location      |
//! | `q` / Esc         | quit                             |

use crate::core::action::Action;
use crate::core::state::App;
use crate::router::NavigationTarget;
use crate::tui::event::TuiEvent;

pub const HELP: &str = "1-9 route · Tab next · : go to · b back · r reload · q quit";

#[derive(Debug)]
pub enum Command {
    Dispatch(Action),
    OpenPrompt,
}

pub fn browse_command(event: &TuiEvent, app: &App) -> Option<Command> {
    let table = app.router.table();
    match event {
        TuiEvent::InputChar(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            table
                .at(index)
                .map(|route| navigate_to(&route.name))
        }
        TuiEvent::Tab => {
            let next = app
                .active_route()
                .and_then(|name| table.position(name))
                .map(|i| (i + 1) % table.len())
                .unwrap_or(0);
            table.at(next).map(|route| navigate_to(&route.name))
        }
        TuiEvent::InputChar(':') | TuiEvent::InputChar('g') => Some(Command::OpenPrompt),
        TuiEvent::InputChar('b') | TuiEvent::Backspace => Some(Command::Dispatch(Action::Back)),
        TuiEvent::InputChar('r') => Some(Command::Dispatch(Action::Reload)),
        TuiEvent::InputChar('q') | TuiEvent::Escape | TuiEvent::ForceQuit => {
            Some(Command::Dispatch(Action::Quit))
        }
        _ => None,
    }
}

fn navigate_to(name: &str) -> Command {
    Command::Dispatch(Action::Navigate(NavigationTarget::Name(name.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;

    fn target_of(command: Option<Command>) -> Option<NavigationTarget> {
        match command {
            Some(Command::Dispatch(Action::Navigate(target))) => Some(target),
            _ => None,
        }
    }

    #[test]
    fn test_digit_navigates_to_nth_route() {
        let app = test_app();
        assert_eq!(
            target_of(browse_command(&TuiEvent::InputChar('2'), &app)),
            Some(NavigationTarget::Name("page2".to_string()))
        );
        assert!(browse_command(&TuiEvent::InputChar('9'), &app).is_none());
    }

    #[test]
    fn test_tab_cycles_routes() {
        let mut app = test_app();
        assert_eq!(
            target_of(browse_command(&TuiEvent::Tab, &app)),
            Some(NavigationTarget::Name("page1".to_string()))
        );

        update(&mut app, Action::Navigate(NavigationTarget::Name("page2".into())));
        assert_eq!(
            target_of(browse_command(&TuiEvent::Tab, &app)),
            Some(NavigationTarget::Name("page1".to_string()))
        );

        update(&mut app, Action::Navigate(NavigationTarget::Name("page1".into())));
        assert_eq!(
            target_of(browse_command(&TuiEvent::Tab, &app)),
            Some(NavigationTarget::Name("page2".to_string()))
        );
    }

    #[test]
    fn test_other_bindings() {
        let app = test_app();
        assert!(matches!(
            browse_command(&TuiEvent::InputChar(':'), &app),
            Some(Command::OpenPrompt)
        ));
        assert!(matches!(
            browse_command(&TuiEvent::Backspace, &app),
            Some(Command::Dispatch(Action::Back))
        ));
        assert!(matches!(
            browse_command(&TuiEvent::InputChar('r'), &app),
            Some(Command::Dispatch(Action::Reload))
        ));
        assert!(matches!(
            browse_command(&TuiEvent::Escape, &app),
            Some(Command::Dispatch(Action::Quit))
        ));
        assert!(browse_command(&TuiEvent::InputChar('x'), &app).is_none());
    }
}
