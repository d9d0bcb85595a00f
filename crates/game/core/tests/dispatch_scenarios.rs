use clicker_core::{
    ActionEffect, ActionId, DispatchError, DispatchOutcome, Dispatcher, GameConfig, PlayerStats,
    StatKind, apply_action,
};
use strum::IntoEnumIterator;

fn start() -> PlayerStats {
    PlayerStats::new(100, 10, 50)
}

fn dispatch(stats: &mut PlayerStats, raw: &str) -> DispatchOutcome {
    Dispatcher::new(stats).dispatch(raw)
}

#[test]
fn eat_restores_hp() {
    let mut stats = start();
    assert!(dispatch(&mut stats, "eat").is_applied());
    assert_eq!(stats, PlayerStats::new(105, 10, 50));
}

#[test]
fn study_trades_happiness_for_iq() {
    let mut stats = start();
    assert!(dispatch(&mut stats, "study").is_applied());
    assert_eq!(stats, PlayerStats::new(100, 11, 30));
}

#[test]
fn happi_trades_hp_for_happiness() {
    let mut stats = start();
    assert!(dispatch(&mut stats, "happi").is_applied());
    assert_eq!(stats, PlayerStats::new(95, 10, 60));
}

#[test]
fn sleep_restores_hp() {
    let mut stats = start();
    assert!(dispatch(&mut stats, "sleep").is_applied());
    assert_eq!(stats, PlayerStats::new(105, 10, 50));
}

#[test]
fn unknown_action_leaves_stats_and_reports_it() {
    let mut stats = start();
    let outcome = dispatch(&mut stats, "dance");

    assert_eq!(stats, start());
    assert_eq!(
        outcome.error(),
        Some(&DispatchError::UnrecognizedAction("dance".into()))
    );
}

#[test]
fn each_action_changes_exactly_its_listed_fields() {
    for action in ActionId::iter() {
        let effect = ActionEffect::of(action);
        let after = apply_action(start(), action);

        for stat in StatKind::iter() {
            assert_eq!(
                after.get(stat) - start().get(stat),
                effect.delta_for(stat),
                "{action} changed {stat} unexpectedly"
            );
        }
    }
}

#[test]
fn deltas_accumulate_without_clamping() {
    let mut stats = start();
    dispatch(&mut stats, "study");
    dispatch(&mut stats, "study");
    dispatch(&mut stats, "study");
    assert_eq!(stats, PlayerStats::new(100, 13, -10));

    let mut stats = PlayerStats::new(3, 0, 0);
    for _ in 0..4 {
        stats = apply_action(stats, ActionId::Happi);
    }
    assert_eq!(stats, PlayerStats::new(-17, 0, 40));
}

#[test]
fn default_config_matches_reference_start() {
    assert_eq!(GameConfig::default().initial_stats, start());
}

#[cfg(feature = "serde")]
#[test]
fn stats_serialize_with_stable_keys() {
    let json = serde_json::to_string(&start()).expect("serialize stats");
    assert_eq!(json, r#"{"hp":100,"iq":10,"happiness":50}"#);

    let outcome = {
        let mut stats = start();
        dispatch(&mut stats, "dance")
    };
    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(json["Skipped"]["requested"], "dance");
}
