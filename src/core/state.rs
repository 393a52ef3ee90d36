//! # Application State
//!
//! Core session state for trmmtui. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── mode: Mode                 // login form or client browser
//! ├── url: String                // accumulated URL field
//! ├── key: String                // accumulated API key field
//! ├── focus: FocusRing           // URL, key, submit
//! ├── char_limit: usize          // per-field input cap
//! ├── clients: Vec<Client>       // left column entries
//! ├── selected_client: usize     // highlighted entry
//! └── panel_text: String         // right column content
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;

use crate::core::config::{DEFAULT_CHAR_LIMIT, DEFAULT_PANEL_TEXT, ResolvedConfig};
use crate::core::focus::FocusRing;

/// Number of text fields on the login form (URL, API key).
pub const LOGIN_FIELDS: usize = 2;
pub const URL_FIELD: usize = 0;
pub const KEY_FIELD: usize = 1;

/// Top-level screen selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    App,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::App => "app",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub name: String,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub struct App {
    pub mode: Mode,
    pub url: String,
    pub key: String,
    pub focus: FocusRing,
    pub char_limit: usize,
    pub clients: Vec<Client>,
    pub selected_client: usize,
    pub panel_text: String,
}

impl App {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            mode: Mode::Login,
            url: String::new(),
            key: String::new(),
            focus: FocusRing::new(LOGIN_FIELDS),
            char_limit: DEFAULT_CHAR_LIMIT,
            clients,
            selected_client: 0,
            panel_text: DEFAULT_PANEL_TEXT.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.clients.iter().map(Client::new).collect());
        app.char_limit = config.char_limit;
        app.panel_text = config.panel_text.clone();
        app
    }

    /// Text accumulated in the given login field.
    pub fn field_value(&self, field: usize) -> &str {
        match field {
            URL_FIELD => &self.url,
            KEY_FIELD => &self.key,
            _ => "",
        }
    }

    pub(crate) fn field_mut(&mut self, field: usize) -> Option<&mut String> {
        match field {
            URL_FIELD => Some(&mut self.url),
            KEY_FIELD => Some(&mut self.key),
            _ => None,
        }
    }

    /// Both credentials are present. No other validation is performed.
    pub fn credentials_filled(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    pub fn selected(&self) -> Option<&Client> {
        self.clients.get(self.selected_client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{TrmmConfig, resolve};
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.mode, Mode::Login);
        assert!(app.url.is_empty());
        assert!(app.key.is_empty());
        assert_eq!(app.focus.index(), 0);
        assert_eq!(app.panel_text, "Table here");
        assert_eq!(app.char_limit, 255);
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(Mode::Login.as_str(), "login");
        assert_eq!(Mode::App.to_string(), "app");
    }

    #[test]
    fn test_from_config_uses_default_clients() {
        let resolved = resolve(&TrmmConfig::default(), None);
        let app = App::from_config(&resolved);
        let names: Vec<&str> = app.clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Client1", "Client2"]);
        assert_eq!(app.selected().map(|c| c.name.as_str()), Some("Client1"));
    }

    #[test]
    fn test_credentials_filled_requires_both() {
        let mut app = test_app();
        assert!(!app.credentials_filled());
        app.url.push_str("https://rmm.example");
        assert!(!app.credentials_filled());
        app.key.push_str("k");
        assert!(app.credentials_filled());
    }

    #[test]
    fn test_field_value_out_of_range_is_empty() {
        let mut app = test_app();
        app.url.push('x');
        assert_eq!(app.field_value(URL_FIELD), "x");
        assert_eq!(app.field_value(LOGIN_FIELDS), "");
    }
}
