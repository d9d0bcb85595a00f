//! Glue code tying the form, dispatcher, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal::TerminalSession;
use clicker_frontend_core::{
    EventConsumer, FormFields, FrontendConfig, frontend::FrontendApp, message::MessageLog,
};

/// Terminal frontend for the clicker.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: crate::config::CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: crate::config::CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let CliFrontend {
            frontend_config,
            cli_config,
        } = self;

        let initial_stats = frontend_config.game.initial_stats;
        tracing::info!(?initial_stats, "Binding form fields");
        let form = FormFields::from_stats(initial_stats);

        let mut messages = MessageLog::new(frontend_config.messages.capacity);
        messages.push_note("Student simulation started.");

        let consumer = CliEventConsumer::new(messages, frontend_config.messages.show_applied);
        let event_loop = EventLoop::new(form, consumer, cli_config);

        let mut session = TerminalSession::enter()?;
        let consumer = event_loop.run(session.terminal()).await?;
        session.leave()?;

        tracing::info!(messages = consumer.message_log().len(), "CLI client exiting");

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliFrontend {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
