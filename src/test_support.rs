//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::{App, Client};

/// Creates a test App on the login form with the two stock clients.
pub fn test_app() -> App {
    App::new(vec![Client::new("Client1"), Client::new("Client2")])
}

/// Creates a test App with both login fields filled and focus on the URL field.
pub fn filled_app() -> App {
    let mut app = test_app();
    app.url = "https://rmm.example".to_string();
    app.key = "secret".to_string();
    app
}
