//! # LoginForm Component
//!
//! Centered box with the URL field, the API key field and a submit button.
//!
//! ```text
//! ┌ Login ─────────────────────────────────┐
//! │> https://api.company.com               │
//! │> ********                              │
//! │                                        │
//! │[ Submit ]                              │
//! └────────────────────────────────────────┘
//!   Tab/↓ next  Shift+Tab/↑ prev  Enter select  Esc quit
//! ```
//!
//! Focus comes from `App::focus`; the field values come from `App` too.
//! Only presentation state (`TextFieldState`) is borrowed mutably.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::{App, LOGIN_FIELDS};
use crate::tui::component::Component;
use crate::tui::components::text_field::{TextField, TextFieldState};

const FORM_WIDTH: u16 = 60;
// Fields, spacer, button, borders
const FORM_HEIGHT: u16 = LOGIN_FIELDS as u16 + 2 + 2;
const HELP_TEXT: &str = "Tab/↓ next  Shift+Tab/↑ prev  Enter select  Esc quit";

pub fn focused_style() -> Style {
    Style::default().fg(Color::Indexed(205))
}

pub fn blurred_style() -> Style {
    Style::default().fg(Color::Indexed(240))
}

/// The submit button line, highlighted as a whole when focused.
pub fn submit_button(focused: bool) -> Line<'static> {
    if focused {
        Line::from(Span::styled("[ Submit ]", focused_style()))
    } else {
        Line::from(vec![
            Span::raw("[ "),
            Span::styled("Submit", blurred_style()),
            Span::raw(" ]"),
        ])
    }
}

/// Transient render wrapper for the login screen.
pub struct LoginForm<'a> {
    app: &'a App,
    fields: &'a mut [TextFieldState; LOGIN_FIELDS],
}

impl<'a> LoginForm<'a> {
    pub fn new(app: &'a App, fields: &'a mut [TextFieldState; LOGIN_FIELDS]) -> Self {
        Self { app, fields }
    }
}

impl Component for LoginForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let form_area = centered_rect_fixed(FORM_WIDTH, FORM_HEIGHT + 1, area);
        let [box_area, help_area] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Length(1)])
                .areas(form_area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Login ");
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let focus = self.app.focus;
        for (i, state) in self.fields.iter_mut().enumerate() {
            TextField::new(state, self.app.field_value(i))
                .focused(focus.field() == Some(i), focused_style())
                .render(frame, rows[i]);
        }

        frame.render_widget(
            Paragraph::new(submit_button(focus.is_submit())),
            rows[LOGIN_FIELDS + 1],
        );

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, help_area);
    }
}

/// Fixed-size rect centered in `r`, clamped to it.
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}
