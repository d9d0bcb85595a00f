//! Terminal UI frontend for the student clicker.
//!
//! `CliFrontend` owns the form fields, maps keys to actions, runs them
//! through the dispatcher, and renders the result with ratatui.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in the client binary)
pub use clicker_frontend_core::FrontendConfig;
