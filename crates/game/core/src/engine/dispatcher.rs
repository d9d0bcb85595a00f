//! Action dispatcher over an injected [`StatStore`].

use arrayvec::ArrayVec;
use strum::EnumCount;

use super::{AppliedAction, DispatchOutcome, StatChange};
use crate::action::{ActionEffect, ActionId, DispatchError};
use crate::error::GameError;
use crate::stats::{PlayerStats, StatKind};
use crate::store::StatStore;

/// Applies an action's deltas to a stats record.
///
/// Pure and total: every [`ActionId`] has an effect, and no field is bounded.
pub fn apply_action(stats: PlayerStats, action: ActionId) -> PlayerStats {
    ActionEffect::of(action).apply(stats)
}

/// Dispatches actions against externally owned stat storage.
///
/// Each call is independent. An action is either applied in full or not at
/// all: the primary field ([`StatKind::PRIMARY`]) must be readable, then every
/// field the action touches is read before anything is written.
pub struct Dispatcher<'a, S: StatStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: StatStore + ?Sized> Dispatcher<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Dispatches an externally supplied identifier.
    ///
    /// Unknown identifiers are logged and leave the store untouched.
    pub fn dispatch(&mut self, raw: &str) -> DispatchOutcome {
        match ActionId::parse(raw) {
            Ok(action) => self.dispatch_action(action),
            Err(error) => {
                tracing::warn!(action = raw, "Unrecognized action");
                DispatchOutcome::Skipped {
                    requested: raw.to_owned(),
                    error,
                }
            }
        }
    }

    /// Dispatches a known action.
    pub fn dispatch_action(&mut self, action: ActionId) -> DispatchOutcome {
        match self.try_apply(action) {
            Ok(applied) => {
                tracing::debug!(
                    %action,
                    changes = ?applied.changes,
                    "Action applied"
                );
                DispatchOutcome::Applied(applied)
            }
            Err(error) => {
                tracing::warn!(
                    %action,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Action skipped: {}",
                    error
                );
                DispatchOutcome::Skipped {
                    requested: action.to_string(),
                    error,
                }
            }
        }
    }

    fn try_apply(&mut self, action: ActionId) -> Result<AppliedAction, DispatchError> {
        let effect = ActionEffect::of(action);

        // The primary field gates the whole action, even one that never touches it.
        self.store.read(StatKind::PRIMARY)?;

        let mut changes = ArrayVec::<StatChange, { StatKind::COUNT }>::new();
        for entry in effect.deltas() {
            let before = self.store.read(entry.stat)?;
            changes.push(StatChange {
                stat: entry.stat,
                before,
                after: before.saturating_add(entry.delta),
            });
        }

        for (written, change) in changes.iter().enumerate() {
            if let Err(err) = self.store.write(change.stat, change.after) {
                self.rollback(&changes[..written]);
                return Err(err.into());
            }
        }

        Ok(AppliedAction { action, changes })
    }

    /// Restores fields already written when a later write fails.
    fn rollback(&mut self, written: &[StatChange]) {
        for change in written.iter().rev() {
            if let Err(err) = self.store.write(change.stat, change.before) {
                tracing::error!(stat = %change.stat, "Rollback failed: {}", err);
            }
        }
    }
}
