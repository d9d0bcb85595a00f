//! Input handling (keyboard polling and key dispatch).

use anyhow::Result;
use clicker_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Drains pending terminal events. Returns true when the user quits.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key, terminal)?
                }
                TermEvent::Resize(_, _) => {
                    self.render(terminal)?;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key, &self.app_state.mode) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Ok(true);
            }
            KeyAction::Dispatch(action) => {
                if self.dispatch_action(action).requires_redraw {
                    self.render(terminal)?;
                }
                return Ok(false);
            }
            KeyAction::SubmitPrompt => {
                let typed = self.app_state.take_prompt().unwrap_or_default();
                self.dispatch_raw(&typed);
            }
            KeyAction::OpenPrompt => self.app_state.open_prompt(),
            KeyAction::PromptInput(ch) => self.app_state.prompt_push(ch),
            KeyAction::PromptBackspace => self.app_state.prompt_pop(),
            KeyAction::ExitModal => self.app_state.exit_to_normal(),
            KeyAction::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }
}
