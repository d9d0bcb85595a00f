//! Ratatui theme implementation of PresentationMapper.

use clicker_core::StatKind;
use clicker_frontend_core::{message::MessageLevel, view_model::PresentationMapper};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_stat(&self, kind: StatKind, value: Option<i64>) -> Self::Style {
        let Some(value) = value else {
            return Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT);
        };

        let color = match kind {
            StatKind::Hp => match value {
                75.. => Color::Green,
                50..=74 => Color::Yellow,
                25..=49 => Color::LightRed,
                _ => Color::Red,
            },
            StatKind::Iq => Color::Cyan,
            StatKind::Happiness => {
                if value < 0 {
                    Color::Magenta
                } else {
                    Color::LightYellow
                }
            }
        };

        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if value <= 0 {
            style.add_modifier(Modifier::SLOW_BLINK)
        } else {
            style
        }
    }

    fn style_delta(&self, delta: i64) -> Self::Style {
        let color = match delta.signum() {
            1 => Color::Green,
            -1 => Color::Red,
            _ => Color::DarkGray,
        };
        Style::default().fg(color)
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_colour_tracks_value() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.style_stat(StatKind::Hp, Some(100)).fg, Some(Color::Green));
        assert_eq!(theme.style_stat(StatKind::Hp, Some(30)).fg, Some(Color::LightRed));
        assert_eq!(theme.style_stat(StatKind::Hp, Some(-5)).fg, Some(Color::Red));
        assert_eq!(theme.style_stat(StatKind::Iq, None).fg, Some(Color::Red));
    }

    #[test]
    fn delta_colour_follows_sign() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.style_delta(5).fg, Some(Color::Green));
        assert_eq!(theme.style_delta(-20).fg, Some(Color::Red));
        assert_eq!(theme.style_delta(0).fg, Some(Color::DarkGray));
    }
}
