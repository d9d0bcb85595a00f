//! Header widget displaying session counters and current mode.

use clicker_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

/// Render the header panel with action counts and current mode.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let mode_text = if app_state.is_prompt() {
        " [PROMPT]"
    } else {
        ""
    };

    let last_action = view_model
        .last_action
        .map_or_else(|| "-".to_string(), |action| action.to_string());

    let text = vec![Line::from(vec![
        Span::raw("Applied: "),
        Span::styled(
            view_model.session.applied.to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw(" | Skipped: "),
        Span::styled(
            view_model.session.skipped.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Last: "),
        Span::styled(
            last_action,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Student Simulation"),
    );

    frame.render_widget(paragraph, area);
}
