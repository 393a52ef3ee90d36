//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop only redraws after an event
//! (including terminal resize). Between events it sleeps in `poll` for up
//! to 250ms.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{DEFAULT_KEY_PLACEHOLDER, DEFAULT_URL_PLACEHOLDER, ResolvedConfig};
use crate::core::state::{App, LOGIN_FIELDS, Mode};
use crate::tui::components::TextFieldState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // URL field, key field
    pub fields: [TextFieldState; LOGIN_FIELDS],
    pub client_list: ListState,
}

impl TuiState {
    pub fn new(url_placeholder: &str, key_placeholder: &str) -> Self {
        Self {
            fields: [
                TextFieldState::new(url_placeholder),
                TextFieldState::new(key_placeholder).masked('*'),
            ],
            client_list: ListState::default(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(&config.url_placeholder, &config.key_placeholder)
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(DEFAULT_URL_PLACEHOLDER, DEFAULT_KEY_PLACEHOLDER)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Show);
    }
}

/// Map a terminal event to a core action for the given screen.
///
/// On the login form every printable key is text, so only Esc and Ctrl+C
/// quit there. The client browser also quits on `q`.
pub fn action_for(mode: Mode, event: &TuiEvent) -> Option<Action> {
    match (mode, event) {
        (_, TuiEvent::ForceQuit | TuiEvent::Escape) => Some(Action::Quit),
        (_, TuiEvent::Resize) => None,

        (Mode::Login, TuiEvent::Tab | TuiEvent::CursorDown) => Some(Action::FocusNext),
        (Mode::Login, TuiEvent::BackTab | TuiEvent::CursorUp) => Some(Action::FocusPrev),
        (Mode::Login, TuiEvent::Submit) => Some(Action::Submit),
        (Mode::Login, TuiEvent::InputChar(c)) => Some(Action::InputChar(*c)),
        (Mode::Login, TuiEvent::Backspace) => Some(Action::Backspace),

        (Mode::App, TuiEvent::CursorUp | TuiEvent::InputChar('k')) => Some(Action::SelectPrev),
        (Mode::App, TuiEvent::CursorDown | TuiEvent::InputChar('j')) => Some(Action::SelectNext),
        (Mode::App, TuiEvent::InputChar('q')) => Some(Action::Quit),
        (Mode::App, _) => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::from_config(&config);

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let Some(first_event) = poll_event_timeout(POLL_TIMEOUT)? else {
                continue;
            };
            needs_redraw = true;

            // Drain everything pending before the next draw
            let mut pending = vec![first_event];
            while let Some(event) = poll_event_immediate()? {
                pending.push(event);
            }

            for event in pending {
                let Some(action) = action_for(app.mode, &event) else {
                    continue;
                };
                match update(&mut app, action) {
                    Effect::Quit => return Ok(()),
                    Effect::LoggedIn => {
                        info!("Showing {} clients", app.clients.len());
                    }
                    Effect::None => {}
                }
            }
        }
    });

    ratatui::restore();
    info!("Terminal restored");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_navigation_keys() {
        assert_eq!(action_for(Mode::Login, &TuiEvent::Tab), Some(Action::FocusNext));
        assert_eq!(action_for(Mode::Login, &TuiEvent::CursorDown), Some(Action::FocusNext));
        assert_eq!(action_for(Mode::Login, &TuiEvent::BackTab), Some(Action::FocusPrev));
        assert_eq!(action_for(Mode::Login, &TuiEvent::CursorUp), Some(Action::FocusPrev));
        assert_eq!(action_for(Mode::Login, &TuiEvent::Submit), Some(Action::Submit));
    }

    #[test]
    fn test_login_q_is_text() {
        assert_eq!(
            action_for(Mode::Login, &TuiEvent::InputChar('q')),
            Some(Action::InputChar('q'))
        );
    }

    #[test]
    fn test_app_q_quits() {
        assert_eq!(action_for(Mode::App, &TuiEvent::InputChar('q')), Some(Action::Quit));
        assert_eq!(action_for(Mode::App, &TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_quit_keys_in_both_modes() {
        for mode in [Mode::Login, Mode::App] {
            assert_eq!(action_for(mode, &TuiEvent::Escape), Some(Action::Quit));
            assert_eq!(action_for(mode, &TuiEvent::ForceQuit), Some(Action::Quit));
        }
    }

    #[test]
    fn test_app_selection_keys() {
        assert_eq!(action_for(Mode::App, &TuiEvent::CursorDown), Some(Action::SelectNext));
        assert_eq!(action_for(Mode::App, &TuiEvent::InputChar('j')), Some(Action::SelectNext));
        assert_eq!(action_for(Mode::App, &TuiEvent::CursorUp), Some(Action::SelectPrev));
        assert_eq!(action_for(Mode::App, &TuiEvent::InputChar('k')), Some(Action::SelectPrev));
    }

    #[test]
    fn test_resize_maps_to_nothing() {
        assert_eq!(action_for(Mode::Login, &TuiEvent::Resize), None);
    }

    #[test]
    fn test_tui_state_masks_key_field_only() {
        let tui = TuiState::default();
        assert_eq!(tui.fields[0].mask, None);
        assert_eq!(tui.fields[1].mask, Some('*'));
        assert_eq!(tui.fields[0].placeholder, "https://api.company.com");
    }
}
