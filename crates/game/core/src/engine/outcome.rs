//! Result of a single dispatch.

use arrayvec::ArrayVec;
use strum::EnumCount;

use crate::action::{ActionId, DispatchError};
use crate::stats::{PlayerStats, StatKind};

/// One field's value before and after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChange {
    pub stat: StatKind,
    pub before: i64,
    pub after: i64,
}

impl StatChange {
    pub const fn delta(&self) -> i64 {
        self.after.saturating_sub(self.before)
    }
}

/// An action whose deltas were written back to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedAction {
    pub action: ActionId,
    pub changes: ArrayVec<StatChange, { StatKind::COUNT }>,
}

impl AppliedAction {
    /// Change recorded for `stat`, if the action touched it.
    pub fn change(&self, stat: StatKind) -> Option<&StatChange> {
        self.changes.iter().find(|change| change.stat == stat)
    }

    /// Projects the changes onto `stats`.
    pub fn apply_to(&self, mut stats: PlayerStats) -> PlayerStats {
        for change in &self.changes {
            stats.set(change.stat, change.after);
        }
        stats
    }
}

/// What happened to one dispatch request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchOutcome {
    /// Every delta of the action was applied.
    Applied(AppliedAction),

    /// Nothing was written; `error` says why.
    Skipped {
        /// Identifier as the caller supplied it.
        requested: String,
        error: DispatchError,
    },
}

impl DispatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn applied(&self) -> Option<&AppliedAction> {
        match self {
            Self::Applied(applied) => Some(applied),
            Self::Skipped { .. } => None,
        }
    }

    /// Diagnostic for a skipped request.
    pub fn error(&self) -> Option<&DispatchError> {
        match self {
            Self::Applied(_) => None,
            Self::Skipped { error, .. } => Some(error),
        }
    }
}
