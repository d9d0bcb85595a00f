//! UI rendering using the widget set and ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use clicker_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Rows taken by the stats/action row: four actions plus borders.
const BODY_HEIGHT: u16 = 6;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render the terminal UI.
///
/// Layout, top to bottom: header, stats and action bar side by side,
/// messages, footer (key help or the action prompt).
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Length(BODY_HEIGHT),              // Stats + actions
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Min(0),                           // Spacer
                Constraint::Length(2),                        // Footer
            ])
            .split(frame.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        widgets::header::render(frame, chunks[0], ctx.view_model, ctx.app_state);
        widgets::player_stats::render(frame, body[0], ctx.view_model, &theme);
        widgets::action_bar::render(frame, body[1], ctx.view_model);

        widgets::messages::render(frame, chunks[2], ctx.messages, &theme);

        widgets::footer::render(frame, chunks[4], ctx.app_state);
    })?;

    Ok(())
}
