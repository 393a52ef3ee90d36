use crate::core::state::{App, Mode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ClientList, ContentPanel, LoginForm};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    match app.mode {
        Mode::Login => LoginForm::new(app, &mut tui.fields).render(frame, area),
        Mode::App => draw_main(frame, area, app, tui),
    }
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    // Recomputed from the current frame size on every draw
    let (left_width, right_width) = split_columns(area.width);
    let [left, right] =
        Layout::horizontal([Constraint::Length(left_width), Constraint::Length(right_width)])
            .areas(area);

    ClientList::new(&app.clients, app.selected_client, &mut tui.client_list).render(frame, left);
    ContentPanel {
        text: &app.panel_text,
    }
    .render(frame, right);
}

/// Column widths for the main screen: a quarter for the list, three quarters
/// for the panel. Both round down, so a cell may be left over on the right.
pub fn split_columns(width: u16) -> (u16, u16) {
    let w = u32::from(width);
    ((w / 4) as u16, (w * 3 / 4) as u16)
}
