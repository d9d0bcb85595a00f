//! Player actions and their effects.
//!
//! - [`ActionId`]: closed set of known actions, parsed from external strings
//! - [`ActionEffect`]: the fixed per-action delta table
//! - [`DispatchError`]: why an action was not applied

mod effect;
mod error;
mod kind;

pub use effect::{ActionEffect, StatDelta};
pub use error::DispatchError;
pub use kind::ActionId;
