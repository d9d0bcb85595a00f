//! Utilities for reacting to dispatch outcomes inside UI layers.
use clicker_core::DispatchOutcome;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_outcome(&mut self, outcome: &DispatchOutcome) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}
