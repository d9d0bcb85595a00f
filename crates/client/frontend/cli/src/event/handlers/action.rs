//! Action dispatch handlers.

use clicker_core::{ActionId, DispatchOutcome, Dispatcher};
use clicker_frontend_core::{EventConsumer, EventImpact};

use super::super::EventLoop;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Dispatches a hotkey-bound action.
    pub(in crate::event) fn dispatch_action(&mut self, action: ActionId) -> EventImpact {
        let outcome = Dispatcher::new(&mut self.form).dispatch_action(action);
        self.absorb(&outcome)
    }

    /// Dispatches an identifier typed into the prompt.
    pub(in crate::event) fn dispatch_raw(&mut self, raw: &str) -> EventImpact {
        let outcome = Dispatcher::new(&mut self.form).dispatch(raw.trim());
        self.absorb(&outcome)
    }

    fn absorb(&mut self, outcome: &DispatchOutcome) -> EventImpact {
        let impact = self.consumer.on_outcome(outcome);
        self.view_model.update(&self.form, outcome);
        impact
    }
}

#[cfg(test)]
mod tests {
    use clicker_core::{PlayerStats, StatKind, StatStore};
    use clicker_frontend_core::{FormFields, message::MessageLog};

    use super::*;
    use crate::{config::CliConfig, event::CliEventConsumer};

    fn event_loop() -> EventLoop<CliEventConsumer> {
        EventLoop::new(
            FormFields::from_stats(PlayerStats::new(100, 10, 50)),
            CliEventConsumer::new(MessageLog::new(16), true),
            CliConfig::default(),
        )
    }

    #[test]
    fn hotkey_dispatch_updates_form_and_view() {
        let mut event_loop = event_loop();
        assert!(event_loop.dispatch_action(ActionId::Study).requires_redraw);

        assert_eq!(event_loop.form.read(StatKind::Iq), Ok(11));
        assert_eq!(event_loop.form.read(StatKind::Happiness), Ok(30));
        let row = event_loop.view_model.stat(StatKind::Happiness).unwrap();
        assert_eq!(row.last_delta, Some(-20));
    }

    #[test]
    fn prompt_dispatch_trims_and_reports_unknown_names() {
        let mut event_loop = event_loop();
        event_loop.dispatch_raw("  sleep ");
        event_loop.dispatch_raw("dance");

        assert_eq!(
            event_loop.form.snapshot(),
            Ok(PlayerStats::new(105, 10, 50))
        );
        assert_eq!(event_loop.view_model.session.applied, 1);
        assert_eq!(event_loop.view_model.session.skipped, 1);

        let newest = event_loop.consumer.message_log().recent(1).next().unwrap();
        assert_eq!(newest.text, "Unknown action \"dance\"");
    }
}
