use crate::stats::PlayerStats;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Values the stat fields hold when a session starts.
    pub initial_stats: PlayerStats,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HP: i64 = 100;
    pub const DEFAULT_IQ: i64 = 10;
    pub const DEFAULT_HAPPINESS: i64 = 50;

    pub const DEFAULT_STATS: PlayerStats =
        PlayerStats::new(Self::DEFAULT_HP, Self::DEFAULT_IQ, Self::DEFAULT_HAPPINESS);

    pub fn new() -> Self {
        Self {
            initial_stats: Self::DEFAULT_STATS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
