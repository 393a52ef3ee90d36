//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `ContentPanel`: Right column of the main screen
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose presentation state lives in `TuiState` and is borrowed
//! by a wrapper created each frame:
//! - `TextField`: Single-line input with placeholder, masking and scrolling
//! - `LoginForm`: The two login fields plus the submit button
//! - `ClientList`: Selectable list of clients
//!
//! Business state (field values, focus, selection) always comes from
//! `core::state::App` as props; components never mutate it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── text_field.rs     (Single input line)
//! ├── login_form.rs     (Login screen)
//! ├── client_list.rs    (Left column)
//! └── content_panel.rs  (Right column)
//! ```

pub mod client_list;
pub mod content_panel;
pub mod login_form;
pub mod text_field;

pub use client_list::ClientList;
pub use content_panel::ContentPanel;
pub use login_form::LoginForm;
pub use text_field::{TextField, TextFieldState};
