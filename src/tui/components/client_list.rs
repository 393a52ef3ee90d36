//! # ClientList Component
//!
//! Left column of the main screen: a bordered list of client names with the
//! selected entry highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListState` lives in `TuiState` (keeps the scroll offset between frames)
//! - `ClientList` is created each frame with the clients borrowed from `App`

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::state::Client;
use crate::tui::component::Component;

pub struct ClientList<'a> {
    clients: &'a [Client],
    selected: usize,
    state: &'a mut ListState,
}

impl<'a> ClientList<'a> {
    pub fn new(clients: &'a [Client], selected: usize, state: &'a mut ListState) -> Self {
        Self {
            clients,
            selected,
            state,
        }
    }
}

impl Component for ClientList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Clients ");

        if self.clients.is_empty() {
            self.state.select(None);
            let empty = Paragraph::new("No clients.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state
            .select(Some(self.selected.min(self.clients.len() - 1)));

        let items: Vec<ListItem> = self
            .clients
            .iter()
            .map(|client| ListItem::new(client.name.as_str()))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Indexed(205))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("│ ");

        frame.render_stateful_widget(list, area, self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(clients: &[Client], selected: usize, state: &mut ListState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ClientList::new(clients, selected, state).render(f, area);
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
    fn test_renders_names_and_marks_selection() {
        let clients = vec![Client::new("Client1"), Client::new("Client2")];
        let mut state = ListState::default();
        let text = render(&clients, 1, &mut state);
        assert!(text.contains("Clients"));
        assert!(text.contains("Client1"));
        assert!(text.contains("│ Client2"));
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_selection_clamped_to_list() {
        let clients = vec![Client::new("only")];
        let mut state = ListState::default();
        render(&clients, 5, &mut state);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_message() {
        let mut state = ListState::default().with_selected(Some(0));
        let text = render(&[], 0, &mut state);
        assert!(text.contains("No clients."));
        assert_eq!(state.selected(), None);
    }
}
