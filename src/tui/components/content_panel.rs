//! # ContentPanel Component
//!
//! Right column of the main screen. Stateless: renders the text it is given
//! inside a bordered block.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct ContentPanel<'a> {
    pub text: &'a str,
}

impl Component for ContentPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Paragraph::new(self.text)
            .block(Block::bordered())
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, area);
    }
}
