//! Widget building blocks composed by [`super::ui`].

pub mod action_bar;
pub mod footer;
pub mod header;
pub mod messages;
pub mod player_stats;
