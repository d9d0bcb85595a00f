//! Player attributes.
//!
//! - [`StatKind`]: field selector with stable string keys
//! - [`PlayerStats`]: the record every action mutates

mod kind;
mod player;

pub use kind::StatKind;
pub use player::PlayerStats;
