//! Action dispatch pipeline.
//!
//! The [`Dispatcher`] is the only code path that mutates stat storage. It
//! resolves an identifier to its [`ActionEffect`](crate::action::ActionEffect),
//! validates that every required field is readable, and writes the results
//! back. Failures never propagate: they are logged and reported in the
//! returned [`DispatchOutcome`].

mod dispatcher;
mod outcome;

pub use dispatcher::{Dispatcher, apply_action};
pub use outcome::{AppliedAction, DispatchOutcome, StatChange};
