//! Fixed effect table mapping each action to its stat deltas.

use arrayvec::ArrayVec;
use strum::EnumCount;

use super::ActionId;
use crate::stats::{PlayerStats, StatKind};

/// Signed change applied to one stat by one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub stat: StatKind,
    pub delta: i64,
}

impl StatDelta {
    pub const fn new(stat: StatKind, delta: i64) -> Self {
        Self { stat, delta }
    }
}

/// Deltas an action applies, in application order.
///
/// Each stat appears at most once and zero deltas are never listed, so
/// [`deltas`](Self::deltas) names exactly the fields the action changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionEffect {
    pub action: ActionId,
    deltas: ArrayVec<StatDelta, { StatKind::COUNT }>,
}

impl ActionEffect {
    /// Looks up the effect of a known action.
    pub fn of(action: ActionId) -> Self {
        use StatKind::*;

        let table: &[StatDelta] = match action {
            ActionId::Eat => &[StatDelta::new(Hp, 5)],
            ActionId::Study => &[StatDelta::new(Iq, 1), StatDelta::new(Happiness, -20)],
            ActionId::Happi => &[StatDelta::new(Hp, -5), StatDelta::new(Happiness, 10)],
            ActionId::Sleep => &[StatDelta::new(Hp, 5)],
        };

        Self {
            action,
            deltas: table.iter().copied().collect(),
        }
    }

    pub fn deltas(&self) -> &[StatDelta] {
        &self.deltas
    }

    /// Delta for a given stat, zero when the action leaves it alone.
    pub fn delta_for(&self, stat: StatKind) -> i64 {
        self.deltas
            .iter()
            .find(|entry| entry.stat == stat)
            .map_or(0, |entry| entry.delta)
    }

    /// Returns true if the action changes `stat`.
    pub fn touches(&self, stat: StatKind) -> bool {
        self.deltas.iter().any(|entry| entry.stat == stat)
    }

    /// Applies every delta to a copy of `stats`.
    pub fn apply(&self, mut stats: PlayerStats) -> PlayerStats {
        for entry in &self.deltas {
            stats.add(entry.stat, entry.delta);
        }
        stats
    }

    /// Human-readable summary such as `iq +1, happiness -20`.
    pub fn summary(&self) -> String {
        self.deltas
            .iter()
            .map(|entry| format!("{} {:+}", entry.stat, entry.delta))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_matches_published_deltas() {
        let rows: Vec<_> = ActionId::iter()
            .map(|action| {
                let effect = ActionEffect::of(action);
                (
                    action,
                    effect.delta_for(StatKind::Hp),
                    effect.delta_for(StatKind::Iq),
                    effect.delta_for(StatKind::Happiness),
                )
            })
            .collect();

        assert_eq!(
            rows,
            [
                (ActionId::Eat, 5, 0, 0),
                (ActionId::Study, 0, 1, -20),
                (ActionId::Happi, -5, 0, 10),
                (ActionId::Sleep, 5, 0, 0),
            ]
        );
    }

    #[test]
    fn lists_only_nonzero_deltas_once() {
        for action in ActionId::iter() {
            let effect = ActionEffect::of(action);
            for stat in StatKind::iter() {
                let listed = effect.deltas().iter().filter(|d| d.stat == stat).count();
                assert!(listed <= 1, "{action} lists {stat} twice");
                assert_eq!(listed == 1, effect.delta_for(stat) != 0);
                assert_eq!(effect.touches(stat), listed == 1);
            }
        }
    }

    #[test]
    fn summary_uses_signed_deltas() {
        assert_eq!(ActionEffect::of(ActionId::Study).summary(), "iq +1, happiness -20");
        assert_eq!(ActionEffect::of(ActionId::Eat).summary(), "hp +5");
    }
}
