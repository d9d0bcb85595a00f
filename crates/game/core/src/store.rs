//! Read/write capability over externally owned stat storage.
//!
//! The dispatcher never touches UI fields directly. Whatever owns the numbers
//! (a form, a widget tree, a plain [`PlayerStats`]) implements [`StatStore`]
//! and is passed in by the caller.

use crate::stats::{PlayerStats, StatKind};

/// Failure to read or write one stat field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreError {
    /// No field is bound for this stat.
    #[error("field `{0}` is not bound")]
    Missing(StatKind),

    /// The field exists but its contents do not parse as an integer.
    #[error("field `{stat}` is not numeric: {raw:?}")]
    NotNumeric { stat: StatKind, raw: String },
}

/// Accessor pair used by the dispatcher.
pub trait StatStore {
    /// Reads the current value of `stat`.
    fn read(&self, stat: StatKind) -> Result<i64, StoreError>;

    /// Overwrites the value of `stat`.
    fn write(&mut self, stat: StatKind, value: i64) -> Result<(), StoreError>;
}

impl StatStore for PlayerStats {
    fn read(&self, stat: StatKind) -> Result<i64, StoreError> {
        Ok(self.get(stat))
    }

    fn write(&mut self, stat: StatKind, value: i64) -> Result<(), StoreError> {
        self.set(stat, value);
        Ok(())
    }
}
