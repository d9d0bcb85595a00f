//! Message panel: the newest dispatch results, oldest at the top.

use clicker_frontend_core::{
    message::{MessageEntry, MessageLog},
    view_model::PresentationMapper,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render as many recent entries as fit inside the panel borders.
///
/// The title counts skipped actions still held in the log.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    log: &MessageLog,
    theme: &T,
) {
    let rows = usize::from(area.height.saturating_sub(2));

    let mut lines: Vec<Line> = log
        .recent(rows)
        .map(|entry| entry_line(entry, theme))
        .collect();
    lines.reverse();

    // Keep the newest line pinned to the bottom edge.
    let padding = rows.saturating_sub(lines.len());
    lines.splice(0..0, std::iter::repeat_n(Line::default(), padding));

    let title = match log.diagnostics() {
        0 => "Messages".to_string(),
        n => format!("Messages ({n} skipped)"),
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn entry_line<'a, T: PresentationMapper<Style = Style>>(
    entry: &'a MessageEntry,
    theme: &T,
) -> Line<'a> {
    let mut spans = Vec::with_capacity(3);

    if let Some(sequence) = entry.sequence {
        spans.push(Span::styled(
            format!("#{sequence:<3} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let style = theme.style_message(entry.level);
    if let Some(tag) = entry.level.tag() {
        spans.push(Span::styled(format!("{tag}: "), style));
    }
    spans.push(Span::styled(entry.text.as_str(), style));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::RatatuiTheme;
    use clicker_core::{Dispatcher, PlayerStats};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn draw(log: &MessageLog, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), log, &RatatuiTheme::new()))
            .unwrap();
        rows(terminal.backend().buffer())
    }

    fn session_log() -> MessageLog {
        let mut stats = PlayerStats::new(100, 10, 50);
        let mut log = MessageLog::new(8);
        log.push_note("Student simulation started.");
        for (sequence, raw) in [(1, "eat"), (2, "dance")] {
            let outcome = Dispatcher::new(&mut stats).dispatch(raw);
            log.push(MessageEntry::from_outcome(&outcome, sequence));
        }
        log
    }

    #[test]
    fn newest_entry_sits_on_the_bottom_row() {
        let screen = draw(&session_log(), 5);

        assert!(screen[0].contains("Messages (1 skipped)"), "{screen:?}");
        assert!(screen[1].contains("Student simulation started."));
        assert!(screen[2].contains("#1"));
        assert!(screen[3].contains("warn: Unknown action \"dance\""));
    }

    #[test]
    fn short_log_is_padded_from_the_top() {
        let mut log = MessageLog::new(4);
        log.push_note("only line");
        let screen = draw(&log, 6);

        assert!(screen[0].contains("Messages"));
        assert!(!screen[0].contains("skipped"));
        assert!(!screen[1].contains("only line"));
        assert!(screen[4].contains("only line"));
    }
}
