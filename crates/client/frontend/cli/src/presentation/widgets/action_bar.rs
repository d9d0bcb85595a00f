//! Action bar listing hotkeys and their effects.

use clicker_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render one line per action: hotkey, name, and effect summary.
///
/// The most recently applied action is highlighted.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let lines: Vec<Line> = view_model
        .actions
        .iter()
        .map(|button| {
            let name_style = if view_model.last_action == Some(button.action) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(
                    format!("[{}] ", button.hotkey),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{:<7}", button.action), name_style),
                Span::styled(button.summary.clone(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Actions"));

    frame.render_widget(paragraph, area);
}
