//! Event loop orchestrating user input, dispatch, and rendering.
//!
//! This module coordinates three concerns:
//! - Keyboard input processing (hotkeys and the action prompt)
//! - Dispatching actions against the form fields
//! - Rendering from the ViewModel

use anyhow::Result;
use tokio::{
    signal,
    time::{self, Duration},
};

use crate::{input::InputHandler, presentation::terminal::Tui, state::AppState};
use clicker_frontend_core::{EventConsumer, FormFields, ViewModel};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the form fields and the derived ViewModel.
///
/// The form is the single source of truth for stat values; every dispatch
/// runs to completion inside one tick.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) form: FormFields,
    pub(crate) view_model: ViewModel,
    /// CLI UI configuration
    pub(crate) cli_config: crate::config::CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(form: FormFields, consumer: C, cli_config: crate::config::CliConfig) -> Self {
        let view_model = ViewModel::from_form(&form);

        Self {
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            form,
            view_model,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = frames.tick() => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                result = signal::ctrl_c() => {
                    if let Err(e) = result {
                        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
                    }
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }

        if let Ok(stats) = self.form.snapshot() {
            tracing::info!(?stats, "Final stats");
        }

        Ok(self.consumer)
    }
}
