//! Deterministic clicker rules shared across frontends.
//!
//! `clicker-core` defines the canonical action table and exposes pure APIs:
//! [`apply_action`] for plain [`PlayerStats`] values, and [`Dispatcher`] for
//! storage owned elsewhere (form fields, widgets) behind the [`StatStore`]
//! capability. All stat mutation flows through the dispatcher.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod stats;
pub mod store;

pub use action::{ActionEffect, ActionId, DispatchError, StatDelta};
pub use config::GameConfig;
pub use engine::{AppliedAction, DispatchOutcome, Dispatcher, StatChange, apply_action};
pub use error::{ErrorSeverity, GameError};
pub use stats::{PlayerStats, StatKind};
pub use store::{StatStore, StoreError};
