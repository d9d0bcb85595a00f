//! Player stat record.

use super::StatKind;

/// The three numeric attributes of the simulated student.
///
/// No bounds are enforced: values may go negative or grow without limit.
/// Arithmetic saturates at the `i64` range rather than wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub hp: i64,
    pub iq: i64,
    pub happiness: i64,
}

impl PlayerStats {
    pub const fn new(hp: i64, iq: i64, happiness: i64) -> Self {
        Self { hp, iq, happiness }
    }

    /// Reads a single field.
    pub const fn get(&self, stat: StatKind) -> i64 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Iq => self.iq,
            StatKind::Happiness => self.happiness,
        }
    }

    /// Mutable access to a single field.
    pub fn get_mut(&mut self, stat: StatKind) -> &mut i64 {
        match stat {
            StatKind::Hp => &mut self.hp,
            StatKind::Iq => &mut self.iq,
            StatKind::Happiness => &mut self.happiness,
        }
    }

    /// Overwrites a single field.
    pub fn set(&mut self, stat: StatKind, value: i64) {
        *self.get_mut(stat) = value;
    }

    /// Adds `delta` to a field and returns the new value.
    pub fn add(&mut self, stat: StatKind, delta: i64) -> i64 {
        let field = self.get_mut(stat);
        *field = field.saturating_add(delta);
        *field
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, stat: StatKind, value: i64) -> Self {
        self.set(stat, value);
        self
    }
}
