//! # TextField Component
//!
//! A single-line text input: prompt, value (optionally masked) or a dimmed
//! placeholder, and the terminal cursor when focused.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TextFieldState` lives in `TuiState` (placeholder, mask, scroll)
//! - `TextField` is created each frame with the value borrowed from `App`
//!
//! The value itself is owned by core state; this component only decides
//! which part of it is visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

const PROMPT: &str = "> ";

/// Persistent presentation state for one input field.
#[derive(Debug, Clone)]
pub struct TextFieldState {
    pub placeholder: String,
    /// Echo character for secret input (`None` = show the value).
    pub mask: Option<char>,
    /// Index of the first visible char when the value overflows the field.
    scroll: usize,
}

impl TextFieldState {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            mask: None,
            scroll: 0,
        }
    }

    pub fn masked(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// What the user sees for `value`: the value itself or one mask char per char.
    pub fn display_text(&self, value: &str) -> String {
        match self.mask {
            Some(m) => std::iter::repeat_n(m, value.chars().count()).collect(),
            None => value.to_string(),
        }
    }

    /// Scroll so the end of `text` (where the cursor sits) fits in `width` cells,
    /// leaving one cell for the cursor.
    fn update_scroll(&mut self, text: &str, width: u16) {
        let chars: Vec<char> = text.chars().collect();
        self.scroll = self.scroll.min(chars.len());
        if width == 0 {
            return;
        }
        let tail_width = |from: usize| -> usize {
            chars[from..].iter().map(|c| c.width().unwrap_or(0)).sum()
        };
        // Snap back when text shrank (e.g. after backspace)
        while self.scroll > 0 && tail_width(self.scroll - 1) < width as usize {
            self.scroll -= 1;
        }
        while self.scroll < chars.len() && tail_width(self.scroll) >= width as usize {
            self.scroll += 1;
        }
    }
}

/// Transient render wrapper for a text field.
pub struct TextField<'a> {
    state: &'a mut TextFieldState,
    value: &'a str,
    focused: bool,
    focused_style: Style,
}

impl<'a> TextField<'a> {
    pub fn new(state: &'a mut TextFieldState, value: &'a str) -> Self {
        Self {
            state,
            value,
            focused: false,
            focused_style: Style::default(),
        }
    }

    /// Mark the field focused; prompt and text take `style` and the cursor is shown.
    pub fn focused(mut self, focused: bool, style: Style) -> Self {
        self.focused = focused;
        self.focused_style = style;
        self
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.focused { self.focused_style } else { Style::default() };
        let prompt_width = PROMPT.width() as u16;
        let text_width = area.width.saturating_sub(prompt_width);

        let (body, visible_width) = if self.value.is_empty() {
            self.state.scroll = 0;
            let placeholder = Span::styled(
                self.state.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            );
            (placeholder, 0)
        } else {
            let display = self.state.display_text(self.value);
            self.state.update_scroll(&display, text_width);
            let visible: String = display.chars().skip(self.state.scroll).collect();
            let width = visible.width() as u16;
            (Span::styled(visible, style), width)
        };

        let line = Line::from(vec![Span::styled(PROMPT, style), body]);
        frame.render_widget(Paragraph::new(line), area);

        if self.focused {
            let cursor_x = area.x + (prompt_width + visible_width).min(area.width.saturating_sub(1));
            frame.set_cursor_position((cursor_x, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_line(state: &mut TextFieldState, value: &str, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                TextField::new(state, value)
                    .focused(true, Style::default())
                    .render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_display_text_masks_each_char() {
        let state = TextFieldState::new("").masked('*');
        assert_eq!(state.display_text("sécret"), "******");
        assert_eq!(TextFieldState::new("").display_text("plain"), "plain");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut state = TextFieldState::new("https://api.company.com");
        let text = render_line(&mut state, "", 40);
        assert!(text.starts_with("> https://api.company.com"));
    }

    #[test]
    fn test_masked_value_hides_key() {
        let mut state = TextFieldState::new("KEY").masked('*');
        let text = render_line(&mut state, "abc", 20);
        assert!(text.starts_with("> ***"));
        assert!(!text.contains("abc"));
    }

    #[test]
    fn test_long_value_scrolls_to_tail() {
        let mut state = TextFieldState::new("");
        let text = render_line(&mut state, "abcdefghij", 8);
        // 6 text cells, one kept for the cursor
        assert_eq!(text, "> fghij ");
    }

    #[test]
    fn test_scroll_snaps_back_when_value_shrinks() {
        let mut state = TextFieldState::new("");
        render_line(&mut state, "abcdefghij", 8);
        let text = render_line(&mut state, "abc", 8);
        assert!(text.starts_with("> abc"));
    }
}
