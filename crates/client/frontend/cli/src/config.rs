//! Terminal-only settings: panel sizing and where the log file goes.
use std::{env, path::PathBuf};

/// Smallest message panel that still shows one line inside its borders.
const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;

/// Settings read once at startup by the terminal client.
///
/// Shared settings (initial stats, message log size) live in
/// [`FrontendConfig`](clicker_frontend_core::FrontendConfig).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Directory for log files; platform data dir when unset.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Reads the process environment.
    ///
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 10, min: 3)
    /// - `CLICKER_LOG_DIR` - Log directory override; empty means unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let panel_height = lookup("CLI_MESSAGE_PANEL_HEIGHT")
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .map(|height| height.max(MIN_MESSAGE_PANEL_HEIGHT));

        let log_dir = lookup("CLICKER_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Self {
            ui: panel_height.map_or_else(UiConfig::default, |message_panel_height| UiConfig {
                message_panel_height,
            }),
            log_dir,
        }
    }
}

/// Layout of the terminal screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Rows given to the message panel, borders included.
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        CliConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.ui.message_panel_height, 10);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn panel_height_has_a_floor() {
        let config = config_from(&[("CLI_MESSAGE_PANEL_HEIGHT", "1")]);
        assert_eq!(config.ui.message_panel_height, MIN_MESSAGE_PANEL_HEIGHT);

        let config = config_from(&[("CLI_MESSAGE_PANEL_HEIGHT", " 14 ")]);
        assert_eq!(config.ui.message_panel_height, 14);

        let config = config_from(&[("CLI_MESSAGE_PANEL_HEIGHT", "tall")]);
        assert_eq!(config.ui.message_panel_height, 10);
    }

    #[test]
    fn empty_log_dir_means_platform_default() {
        for blank in ["", "   "] {
            let config = config_from(&[("CLICKER_LOG_DIR", blank)]);
            assert_eq!(config.log_dir, None, "{blank:?}");
        }

        let config = config_from(&[("CLICKER_LOG_DIR", "/tmp/clicker-logs")]);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/clicker-logs")));
    }
}
