//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// Frontend abstraction for UI layers.
///
/// A frontend owns its form fields and drives the dispatcher from user
/// input until the user quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait FrontendApp: Send {
    /// Run the frontend event loop, returning when the user quits.
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
