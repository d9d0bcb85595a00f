//! Human-readable text for dispatch outcomes.
use clicker_core::{AppliedAction, DispatchError, DispatchOutcome};

use crate::message::MessageLevel;

/// Formats an applied action, e.g. `study: iq 10 → 11, happiness 50 → 30`.
pub fn format_applied(applied: &AppliedAction) -> String {
    let changes = applied
        .changes
        .iter()
        .map(|change| format!("{} {} → {}", change.stat, change.before, change.after))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", applied.action, changes)
}

/// Formats a skipped request.
pub fn format_skipped(requested: &str, error: &DispatchError) -> String {
    match error {
        DispatchError::UnrecognizedAction(raw) => format!("Unknown action {raw:?}"),
        DispatchError::MissingField(_) | DispatchError::InvalidValue { .. } => {
            format!("{requested} skipped: {error}")
        }
    }
}

/// Text and severity for any outcome.
pub fn format_outcome(outcome: &DispatchOutcome) -> (String, MessageLevel) {
    match outcome {
        DispatchOutcome::Applied(applied) => (format_applied(applied), MessageLevel::Info),
        DispatchOutcome::Skipped { requested, error } => (
            format_skipped(requested, error),
            MessageLevel::for_error(error),
        ),
    }
}
