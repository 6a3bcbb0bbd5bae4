//! Rating engine fold behavior.

use sharpline::domain::{RatingConfig, RatingEngine, TeamId};
use sharpline::testkit::domain::{game, kickoff};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

fn team(id: &str) -> TeamId {
    TeamId::from(id)
}

#[test]
fn empty_history_gives_empty_table() {
    let table = RatingEngine::default().build(&[]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.get(&team("KC")), 1500.0);
}

#[test]
fn single_home_win_by_seven() {
    let engine = RatingEngine::default();
    let mut table = engine.build(&[]).unwrap();
    let update = engine
        .apply(&mut table, &game("KC", "BUF", 27, 20, 1))
        .unwrap();

    assert_close(update.expected_home, 0.578, 1e-3);
    assert_close(update.k, 40.0, 1e-12);
    assert_close(update.home_delta, 40.0 * (1.0 - update.expected_home), 1e-12);
    assert_close(update.home_delta + update.away_delta, 0.0, 1e-12);
    assert_close(table.get(&team("KC")), 1500.0 + update.home_delta, 1e-12);
    assert_close(table.get(&team("BUF")), 1500.0 + update.away_delta, 1e-12);
}

#[test]
fn update_is_expected_value_neutral() {
    let engine = RatingEngine::default();

    // Same margin either way so K matches; weight by the model's expectation.
    let mut win_table = engine.build(&[]).unwrap();
    let win = engine
        .apply(&mut win_table, &game("KC", "BUF", 24, 17, 1))
        .unwrap();
    let mut loss_table = engine.build(&[]).unwrap();
    let loss = engine
        .apply(&mut loss_table, &game("KC", "BUF", 17, 24, 1))
        .unwrap();

    let e = win.expected_home;
    assert_close(e * win.home_delta + (1.0 - e) * loss.home_delta, 0.0, 1e-9);
    assert_close(e * win.away_delta + (1.0 - e) * loss.away_delta, 0.0, 1e-9);
}

#[test]
fn margin_multiplier_is_capped() {
    let engine = RatingEngine::default();
    assert_close(engine.k_factor(0), 20.0, 1e-12);
    assert_close(engine.k_factor(14), 60.0, 1e-12);
    assert_close(engine.k_factor(21), 80.0, 1e-12);
    assert_close(engine.k_factor(56), 80.0, 1e-12);
}

#[test]
fn tie_at_home_costs_the_favourite() {
    let engine = RatingEngine::default();
    let table = engine.build(&[game("KC", "BUF", 20, 20, 1)]).unwrap();
    assert!(table.get(&team("KC")) < 1500.0);
    assert!(table.get(&team("BUF")) > 1500.0);
}

#[test]
fn fold_order_follows_timestamps_not_input() {
    let engine = RatingEngine::default();
    let chronological = [
        game("KC", "BUF", 30, 10, 1),
        game("BUF", "MIA", 21, 20, 2),
        game("MIA", "KC", 35, 3, 3),
    ];
    let shuffled = [
        chronological[2].clone(),
        chronological[0].clone(),
        chronological[1].clone(),
    ];

    assert_eq!(
        engine.build(&chronological).unwrap(),
        engine.build(&shuffled).unwrap()
    );
}

#[test]
fn equal_timestamps_keep_input_order() {
    let engine = RatingEngine::default();
    let at = kickoff(1);
    let first = sharpline::domain::GameOutcome::new("KC", "BUF", 30, 10, at);
    let second = sharpline::domain::GameOutcome::new("BUF", "KC", 27, 24, at);

    let forward = engine.build(&[first.clone(), second.clone()]).unwrap();
    let backward = engine.build(&[second, first]).unwrap();
    assert_ne!(forward, backward);
}

#[test]
fn win_probability_treats_unseen_teams_as_initial() {
    let engine = RatingEngine::default();
    let table = engine.build(&[]).unwrap();
    let p = engine
        .win_probability(&table, &team("KC"), &team("BUF"))
        .unwrap();
    assert_close(p.home().value(), 0.578, 1e-3);
    assert_close(p.home().value() + p.away().value(), 1.0, 1e-12);
}

#[test]
fn custom_config_changes_the_model() {
    let engine = RatingEngine::new(RatingConfig {
        home_field_advantage: 0.0,
        ..RatingConfig::default()
    });
    let table = engine.build(&[]).unwrap();
    assert_close(
        engine.expected_home_score(&table, &team("KC"), &team("BUF")),
        0.5,
        1e-12,
    );
}
