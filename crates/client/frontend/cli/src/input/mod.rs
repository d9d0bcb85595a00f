//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use clicker_core::ActionId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Dispatch a known action bound to a hotkey.
    Dispatch(ActionId),
    /// Open the free-text action prompt.
    OpenPrompt,
    /// Character typed into the prompt.
    PromptInput(char),
    PromptBackspace,
    /// Dispatch whatever the prompt holds.
    SubmitPrompt,
    /// Close the prompt without dispatching.
    ExitModal,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands based on the current mode.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.handle_normal(key),
            AppMode::Prompt(_) => self.handle_prompt(key),
        }
    }

    fn handle_normal(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            ':' | '/' => KeyAction::OpenPrompt,
            _ => ActionId::iter()
                .find(|action| action.hotkey() == ch)
                .map_or(KeyAction::None, KeyAction::Dispatch),
        }
    }

    fn handle_prompt(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::SubmitPrompt,
            KeyCode::Esc => KeyAction::ExitModal,
            KeyCode::Backspace => KeyAction::PromptBackspace,
            KeyCode::Char(ch) => KeyAction::PromptInput(ch),
            _ => KeyAction::None,
        }
    }
}
