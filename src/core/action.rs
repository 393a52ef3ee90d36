//! # Actions
//!
//! Everything that can happen in trmmtui becomes an `Action`.
//! User presses Tab on the login form? That's `Action::FocusNext`.
//! User presses Down in the client list? That's `Action::SelectNext`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop to act on.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Actions that do not belong to the active mode are ignored, so the
//! adapter never has to guard them.

use log::{debug, info};

use crate::core::state::{App, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Login form
    FocusNext,
    FocusPrev,
    Submit,
    InputChar(char),
    Backspace,

    // Client browser
    SelectNext,
    SelectPrev,

    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The login form was accepted and the client browser is now active.
    LoggedIn,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    // Typed characters may be part of the API key, so they are not logged
    match &action {
        Action::InputChar(_) => {}
        other => debug!("update: {:?} (mode={})", other, app.mode),
    }

    if action == Action::Quit {
        info!("Quit requested in {} mode", app.mode);
        return Effect::Quit;
    }

    match app.mode {
        Mode::Login => update_login(app, action),
        Mode::App => update_browser(app, action),
    }
}

fn update_login(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FocusNext => {
            app.focus.next();
            Effect::None
        }
        Action::FocusPrev => {
            app.focus.prev();
            Effect::None
        }
        Action::Submit => {
            let mut effect = Effect::None;
            if app.focus.is_submit() {
                if app.credentials_filled() {
                    // No authentication happens here; filled fields are enough.
                    app.mode = Mode::App;
                    info!("Login submitted for {}, switching to {} mode", app.url, app.mode);
                    effect = Effect::LoggedIn;
                } else {
                    debug!("Submit ignored: URL or key is empty");
                }
            }
            // Enter always moves focus on, even after a submit.
            app.focus.next();
            effect
        }
        Action::InputChar(c) => {
            if c.is_control() {
                return Effect::None;
            }
            let Some(field) = app.focus.field() else {
                return Effect::None;
            };
            let limit = app.char_limit;
            if let Some(value) = app.field_mut(field)
                && value.chars().count() < limit
            {
                value.push(c);
            }
            Effect::None
        }
        Action::Backspace => {
            if let Some(field) = app.focus.field()
                && let Some(value) = app.field_mut(field)
            {
                value.pop();
            }
            Effect::None
        }
        _ => Effect::None,
    }
}

fn update_browser(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectNext => {
            if !app.clients.is_empty() {
                app.selected_client = (app.selected_client + 1).min(app.clients.len() - 1);
            }
            Effect::None
        }
        Action::SelectPrev => {
            app.selected_client = app.selected_client.saturating_sub(1);
            Effect::None
        }
        _ => Effect::None,
    }
}
