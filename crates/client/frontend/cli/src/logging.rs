//! File logging for the terminal client.
//!
//! The TUI owns stdout, so tracing output goes to a daily-rolling file.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "clicker.log";

/// Installs the global subscriber writing to `log_dir` (or the platform
/// default). Keep the returned guard alive until exit so buffered lines flush.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir()?,
    };
    prepare_log_dir(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(dir = %dir.display(), "Logging initialized");
    Ok(guard)
}

/// Platform log directory, e.g. `~/.local/share/clicker/logs`.
pub fn default_log_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "clicker")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .context("could not determine a home directory for logs")
}

fn prepare_log_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clicker_frontend_core::FrontendConfig;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn creates_nested_log_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");

        prepare_log_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Existing directories are fine.
        prepare_log_dir(&dir).unwrap();
    }

    #[test]
    fn rejects_file_in_place_of_directory() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("taken");
        std::fs::write(&file, b"x").unwrap();

        assert!(prepare_log_dir(&file).is_err());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn config_warnings_reach_the_installed_subscriber() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("info"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            FrontendConfig::from_lookup(|key| {
                (key == "CLICKER_INITIAL_STATS").then(|| "{hp:".to_string())
            })
        });

        assert_eq!(config.game.initial_stats, FrontendConfig::default().game.initial_stats);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(
            output.contains("Ignoring invalid CLICKER_INITIAL_STATS"),
            "{output}"
        );
    }
}
