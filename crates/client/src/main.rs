//! Student clicker binary.
//!
//! Composition root: loads configuration, sets up logging, and hands control
//! to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! CLICKER_INITIAL_STATS='{"hp":50,"iq":20,"happiness":80}' cargo run -p clicker-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use clicker_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use clicker_frontend_core::frontend::FrontendApp;

    // 1. CLI configuration first: it decides where logs go
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the file writer on drop)
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    // Loaded after logging so invalid-value warnings reach the log file
    let frontend_config = FrontendConfig::from_env();

    tracing::info!("Starting clicker client");
    tracing::info!("Initial stats: {:?}", frontend_config.game.initial_stats);
    tracing::info!("Message capacity: {}", frontend_config.messages.capacity);

    // 3. Hand control to the frontend until the user quits
    CliFrontend::new(frontend_config, cli_config).run().await
}
