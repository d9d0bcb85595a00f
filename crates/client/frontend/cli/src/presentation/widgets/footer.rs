//! Footer widget displaying key bindings or the action prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

/// Render the footer panel.
///
/// Normal mode shows key help; prompt mode shows the text being typed.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text = match &app_state.mode {
        AppMode::Normal => Line::from(vec![
            Span::raw("[e/s/h/z] Act | "),
            Span::raw("[:] Type action | "),
            Span::raw("[q/ESC] Quit"),
        ]),
        AppMode::Prompt(prompt) => Line::from(vec![
            Span::styled("action: ", Style::default().fg(Color::Yellow)),
            Span::raw(prompt.buffer.as_str()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
            Span::raw("   [Enter] Dispatch | [ESC] Cancel"),
        ]),
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::TOP));

    frame.render_widget(paragraph, area);
}
