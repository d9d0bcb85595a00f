//! Application state for mode management and UI context.

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Hotkeys dispatch actions directly.
    Normal,
    /// Free-text prompt for an arbitrary action identifier.
    Prompt(PromptState),
}

/// Text typed into the action prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptState {
    pub buffer: String,
}

/// Mutable application state tracking the current mode.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Normal,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_prompt(&mut self) {
        self.mode = AppMode::Prompt(PromptState::default());
    }

    pub fn exit_to_normal(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn is_prompt(&self) -> bool {
        matches!(self.mode, AppMode::Prompt(_))
    }

    /// Appends to the prompt buffer. No-op outside prompt mode.
    pub fn prompt_push(&mut self, ch: char) {
        if let AppMode::Prompt(prompt) = &mut self.mode {
            prompt.buffer.push(ch);
        }
    }

    /// Removes the last prompt character. No-op outside prompt mode.
    pub fn prompt_pop(&mut self) {
        if let AppMode::Prompt(prompt) = &mut self.mode {
            prompt.buffer.pop();
        }
    }

    /// Leaves prompt mode, returning what was typed.
    pub fn take_prompt(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.mode, AppMode::Normal) {
            AppMode::Prompt(prompt) => Some(prompt.buffer),
            AppMode::Normal => None,
        }
    }
}
