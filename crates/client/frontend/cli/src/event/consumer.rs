//! Maintains the CLI message log in response to dispatch outcomes.
use clicker_core::DispatchOutcome;
use clicker_frontend_core::{
    event::{EventConsumer, EventImpact},
    message::{MessageEntry, MessageLog},
};

pub struct CliEventConsumer {
    log: MessageLog,
    show_applied: bool,
    sequence: u64,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, show_applied: bool) -> Self {
        Self {
            log,
            show_applied,
            sequence: 0,
        }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_outcome(&mut self, outcome: &DispatchOutcome) -> EventImpact {
        self.sequence += 1;

        // Stats panel already shows applied changes when their messages are hidden.
        if outcome.is_applied() && !self.show_applied {
            return EventImpact::redraw();
        }

        self.log
            .push(MessageEntry::from_outcome(outcome, self.sequence));
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
