//! Cross-frontend primitives for presenting the clicker.
//!
//! Houses the form-field adapter, message logging, outcome handling, and
//! view-model types that both the CLI and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod form;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use form::FormFields;
pub use view_model::{PresentationMapper, ViewModel};
