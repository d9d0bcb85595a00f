//! Stat kind enumeration - the three player attributes.

/// Selector for a single [`PlayerStats`](super::PlayerStats) field.
///
/// The snake_case name (`hp`, `iq`, `happiness`) is the stable key used by
/// stores and configuration. `StatKind::COUNT` comes from [`strum::EnumCount`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    /// Hit points. The primary field: actions are skipped when it is unavailable.
    Hp,
    /// Intelligence.
    Iq,
    /// Happiness index.
    Happiness,
}

impl StatKind {
    /// Field whose presence gates every action.
    pub const PRIMARY: Self = Self::Hp;

    /// Element id of the form input bound to this stat.
    pub const fn field_id(self) -> &'static str {
        match self {
            Self::Hp => "id_hp",
            Self::Iq => "id_iq",
            Self::Happiness => "id_happi_index",
        }
    }

    /// Short uppercase label for display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Iq => "IQ",
            Self::Happiness => "HAPPI_INDEX",
        }
    }

    /// Returns true for the field that gates every action.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Hp)
    }
}
