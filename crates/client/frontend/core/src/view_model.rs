//! View-model snapshots derived from the form fields.
//!
//! Presentation layers render from [`ViewModel`] only; it is rebuilt after
//! each dispatch via [`ViewModel::update`].
use clicker_core::{ActionEffect, ActionId, DispatchOutcome, StatKind};
use strum::IntoEnumIterator;

use crate::form::FormFields;
use crate::message::MessageLevel;

/// One stat row as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRow {
    pub kind: StatKind,
    pub label: &'static str,
    /// Parsed value, `None` when the field is unbound or not numeric.
    pub value: Option<i64>,
    /// Raw field text, shown when the value cannot be parsed.
    pub text: Option<String>,
    /// Change made by the most recent applied action.
    pub last_delta: Option<i64>,
}

/// Entry in the action bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub action: ActionId,
    pub hotkey: char,
    pub summary: String,
}

impl ActionButton {
    fn new(action: ActionId) -> Self {
        Self {
            action,
            hotkey: action.hotkey(),
            summary: ActionEffect::of(action).summary(),
        }
    }
}

/// Session counters shown in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: u64,
    pub skipped: u64,
}

impl SessionSummary {
    pub fn total(&self) -> u64 {
        self.applied + self.skipped
    }
}

/// Complete presentation state.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub stats: Vec<StatRow>,
    pub actions: Vec<ActionButton>,
    pub session: SessionSummary,
    pub last_action: Option<ActionId>,
}

impl ViewModel {
    pub fn from_form(form: &FormFields) -> Self {
        Self {
            stats: StatKind::iter().map(|kind| row(form, kind, None)).collect(),
            actions: ActionId::iter().map(ActionButton::new).collect(),
            session: SessionSummary::default(),
            last_action: None,
        }
    }

    /// Refreshes rows from `form` and records `outcome`.
    pub fn update(&mut self, form: &FormFields, outcome: &DispatchOutcome) {
        match outcome.applied() {
            Some(applied) => {
                self.session.applied += 1;
                self.last_action = Some(applied.action);
                self.stats = StatKind::iter()
                    .map(|kind| row(form, kind, applied.change(kind).map(|c| c.delta())))
                    .collect();
            }
            None => {
                self.session.skipped += 1;
                for stat in &mut self.stats {
                    *stat = row(form, stat.kind, stat.last_delta);
                }
            }
        }
    }

    pub fn stat(&self, kind: StatKind) -> Option<&StatRow> {
        self.stats.iter().find(|row| row.kind == kind)
    }
}

fn row(form: &FormFields, kind: StatKind, last_delta: Option<i64>) -> StatRow {
    use clicker_core::StatStore;

    StatRow {
        kind,
        label: kind.label(),
        value: form.read(kind).ok(),
        text: form.text(kind).map(str::to_owned),
        last_delta,
    }
}

/// Framework-independent styling rules.
pub trait PresentationMapper {
    type Style;

    /// Style for a stat value; `None` means the field is unreadable.
    fn style_stat(&self, kind: StatKind, value: Option<i64>) -> Self::Style;

    /// Style for the delta badge next to a stat.
    fn style_delta(&self, delta: i64) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clicker_core::{Dispatcher, PlayerStats};

    #[test]
    fn update_records_deltas_of_last_action() {
        let mut form = FormFields::from_stats(PlayerStats::new(100, 10, 50));
        let mut view = ViewModel::from_form(&form);
        assert_eq!(view.actions.len(), 4);

        let outcome = Dispatcher::new(&mut form).dispatch("happi");
        view.update(&form, &outcome);

        let hp = view.stat(StatKind::Hp).expect("hp row");
        assert_eq!((hp.value, hp.last_delta), (Some(95), Some(-5)));
        let iq = view.stat(StatKind::Iq).expect("iq row");
        assert_eq!((iq.value, iq.last_delta), (Some(10), None));
        assert_eq!(view.last_action, Some(ActionId::Happi));
        assert_eq!(view.session, SessionSummary { applied: 1, skipped: 0 });
    }

    #[test]
    fn skipped_dispatch_keeps_previous_deltas() {
        let mut form = FormFields::from_stats(PlayerStats::new(100, 10, 50));
        let mut view = ViewModel::from_form(&form);

        let outcome = Dispatcher::new(&mut form).dispatch("eat");
        view.update(&form, &outcome);
        let outcome = Dispatcher::new(&mut form).dispatch("dance");
        view.update(&form, &outcome);

        let hp = view.stat(StatKind::Hp).expect("hp row");
        assert_eq!((hp.value, hp.last_delta), (Some(105), Some(5)));
        assert_eq!(view.session.total(), 2);
        assert_eq!(view.last_action, Some(ActionId::Eat));
    }
}
