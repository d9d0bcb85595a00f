//! Player stats widget displaying the three form fields.

use clicker_frontend_core::view_model::{PresentationMapper, StatRow, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the player stats panel.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let lines: Vec<Line> = view_model
        .stats
        .iter()
        .map(|row| stat_line(row, theme))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Student"));

    frame.render_widget(paragraph, area);
}

fn stat_line<'a, T: PresentationMapper<Style = Style>>(row: &'a StatRow, theme: &T) -> Line<'a> {
    let value = match (row.value, row.text.as_deref()) {
        (Some(value), _) => value.to_string(),
        (None, Some(text)) => format!("{text:?} (not a number)"),
        (None, None) if row.kind.is_primary() => "unavailable (all actions blocked)".to_string(),
        (None, None) => "unavailable".to_string(),
    };

    let mut spans = vec![
        Span::styled(format!("{:<12}", row.label), Style::default().fg(Color::White)),
        Span::styled(value, theme.style_stat(row.kind, row.value)),
    ];

    if let Some(delta) = row.last_delta {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("({delta:+})"), theme.style_delta(delta)));
    }

    Line::from(spans)
}
