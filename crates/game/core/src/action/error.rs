//! Dispatch diagnostics.
//!
//! None of these abort the caller: the dispatcher logs them, skips the update,
//! and hands them back inside [`DispatchOutcome`](crate::engine::DispatchOutcome).

use crate::error::{ErrorSeverity, GameError};
use crate::stats::StatKind;
use crate::store::StoreError;

/// Reasons an action was not applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchError {
    /// Identifier is not one of the known actions.
    #[error("unrecognized action {0:?}")]
    UnrecognizedAction(String),

    /// A field the action needs is unavailable.
    #[error("field `{0}` is unavailable")]
    MissingField(StatKind),

    /// Field holds text that does not start with an integer.
    #[error("field `{stat}` holds non-numeric value {raw:?}")]
    InvalidValue { stat: StatKind, raw: String },
}

impl DispatchError {
    /// Stat the diagnostic refers to, if any.
    pub fn stat(&self) -> Option<StatKind> {
        match self {
            Self::UnrecognizedAction(_) => None,
            Self::MissingField(stat) | Self::InvalidValue { stat, .. } => Some(*stat),
        }
    }
}

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(stat) => Self::MissingField(stat),
            StoreError::NotNumeric { stat, raw } => Self::InvalidValue { stat, raw },
        }
    }
}

impl GameError for DispatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnrecognizedAction(_) | Self::InvalidValue { .. } => ErrorSeverity::Validation,
            // The field may be bound later (page still loading).
            Self::MissingField(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedAction(_) => "UNRECOGNIZED_ACTION",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidValue { .. } => "INVALID_VALUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_onto_dispatch_errors() {
        assert_eq!(
            DispatchError::from(StoreError::Missing(StatKind::Hp)),
            DispatchError::MissingField(StatKind::Hp)
        );
        assert_eq!(
            DispatchError::from(StoreError::NotNumeric {
                stat: StatKind::Iq,
                raw: "abc".into(),
            }),
            DispatchError::InvalidValue {
                stat: StatKind::Iq,
                raw: "abc".into(),
            }
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = DispatchError::UnrecognizedAction("dance".into());
        assert_eq!(err.to_string(), "unrecognized action \"dance\"");
        assert_eq!(err.error_code(), "UNRECOGNIZED_ACTION");
        assert!(!err.severity().is_recoverable());

        let err = DispatchError::MissingField(StatKind::Hp);
        assert_eq!(err.to_string(), "field `hp` is unavailable");
        assert!(err.severity().is_recoverable());
        assert_eq!(err.stat(), Some(StatKind::Hp));
    }
}
