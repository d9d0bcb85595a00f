//! Frontend configuration structures and loaders.
//!
//! This module contains settings shared across frontend implementations
//! (CLI, GUI, etc.): initial field values and message log behaviour.

use std::env;

use clicker_core::{GameConfig, PlayerStats, StatKind};

use crate::message::MessageLog;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub game: GameConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLICKER_INITIAL_STATS` - JSON object `{"hp":..,"iq":..,"happiness":..}`
    /// - `CLICKER_INITIAL_HP` / `_IQ` / `_HAPPINESS` - per-field overrides
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64, 1..=1024)
    /// - `SHOW_APPLIED_MESSAGES` - Log successful actions (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    ///
    /// Invalid values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(json) = lookup("CLICKER_INITIAL_STATS") {
            match serde_json::from_str::<PlayerStats>(&json) {
                Ok(stats) => config.game.initial_stats = stats,
                Err(e) => tracing::warn!("Ignoring invalid CLICKER_INITIAL_STATS: {}", e),
            }
        }

        for (key, stat) in [
            ("CLICKER_INITIAL_HP", StatKind::Hp),
            ("CLICKER_INITIAL_IQ", StatKind::Iq),
            ("CLICKER_INITIAL_HAPPINESS", StatKind::Happiness),
        ] {
            if let Some(value) = parse(&lookup, key) {
                config.game.initial_stats.set(stat, value);
            }
        }

        if let Some(capacity) = parse::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.clamp(1, MessageLog::MAX_CAPACITY);
        }
        if let Some(show) = lookup("SHOW_APPLIED_MESSAGES").and_then(|v| parse_bool(&v)) {
            config.messages.show_applied = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Log successful actions, not only diagnostics.
    pub show_applied: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_applied: true,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> FrontendConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FrontendConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.game.initial_stats, PlayerStats::new(100, 10, 50));
        assert_eq!(config.messages.capacity, 64);
        assert!(config.messages.show_applied);
    }

    #[test]
    fn json_then_field_overrides() {
        let config = config_from(&[
            ("CLICKER_INITIAL_STATS", r#"{"hp":20,"iq":30,"happiness":40}"#),
            ("CLICKER_INITIAL_IQ", "99"),
        ]);
        assert_eq!(config.game.initial_stats, PlayerStats::new(20, 99, 40));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("CLICKER_INITIAL_STATS", "{not json"),
            ("CLICKER_INITIAL_HP", "many"),
            ("CLI_MESSAGE_CAPACITY", "0"),
            ("SHOW_APPLIED_MESSAGES", "Off"),
        ]);
        assert_eq!(config.game.initial_stats, PlayerStats::new(100, 10, 50));
        assert_eq!(config.messages.capacity, 1);
        assert!(!config.messages.show_applied);
    }

    #[test]
    fn oversized_capacity_is_capped() {
        let config = config_from(&[("CLI_MESSAGE_CAPACITY", "18446744073709551615")]);
        assert_eq!(config.messages.capacity, MessageLog::MAX_CAPACITY);

        let log = MessageLog::new(config.messages.capacity);
        assert!(log.is_empty());
        assert_eq!(log.capacity(), MessageLog::MAX_CAPACITY);
    }
}
