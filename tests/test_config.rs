use std::path::Path;

use fresh_catch::config::MAX_TIMER_MS;
use fresh_catch::{ConfigError, GameConfig};

fn rejected(config: GameConfig) -> bool {
    matches!(config.validate(), Err(ConfigError::Invalid(_)))
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn non_positive_sizes_and_speeds_are_rejected() {
    let bad = [
        GameConfig { field_width: 0.0, ..GameConfig::default() },
        GameConfig { field_height: -1.0, ..GameConfig::default() },
        GameConfig { basket_width: f32::NAN, ..GameConfig::default() },
        GameConfig { basket_height: 0.0, ..GameConfig::default() },
        GameConfig { basket_speed: 0.0, ..GameConfig::default() },
        GameConfig { item_size: f32::INFINITY, ..GameConfig::default() },
        GameConfig { item_speed: -3.0, ..GameConfig::default() },
    ];
    for config in bad {
        assert!(rejected(config.clone()), "accepted {config:?}");
    }
}

#[test]
fn basket_wider_than_field_is_rejected() {
    assert!(rejected(GameConfig { basket_width: 801.0, ..GameConfig::default() }));
}

#[test]
fn item_wider_than_field_is_rejected() {
    assert!(rejected(GameConfig { item_size: 900.0, ..GameConfig::default() }));
}

#[test]
fn negative_bottom_gap_is_rejected() {
    assert!(rejected(GameConfig { basket_bottom_gap: -1000.0, ..GameConfig::default() }));
    assert!(rejected(GameConfig { basket_bottom_gap: f32::NAN, ..GameConfig::default() }));
}

#[test]
fn basket_must_fit_vertically() {
    assert!(rejected(GameConfig { basket_bottom_gap: 560.0, ..GameConfig::default() }));
    // Exactly flush with the top is still allowed
    let flush = GameConfig { basket_bottom_gap: 540.0, ..GameConfig::default() };
    assert!(flush.validate().is_ok());
    assert_eq!(flush.basket_y(), 0.0);
}

#[test]
fn catch_margin_must_leave_a_catch_zone() {
    assert!(rejected(GameConfig { catch_margin: -1.0, ..GameConfig::default() }));
    assert!(rejected(GameConfig { catch_margin: 50.0, ..GameConfig::default() }));
    assert!(rejected(GameConfig { catch_margin: f32::NAN, ..GameConfig::default() }));
    assert!(GameConfig { catch_margin: 0.0, ..GameConfig::default() }.validate().is_ok());
}

#[test]
fn spawn_interval_must_be_bounded_and_non_zero() {
    assert!(rejected(GameConfig { spawn_interval_ms: 0, ..GameConfig::default() }));
    let too_slow = GameConfig { spawn_interval_ms: MAX_TIMER_MS + 1, ..GameConfig::default() };
    assert!(rejected(too_slow));
}

#[test]
fn huge_feedback_delay_is_rejected() {
    assert!(rejected(GameConfig { feedback_reset_ms: u64::MAX, ..GameConfig::default() }));
    assert!(GameConfig { feedback_reset_ms: 0, ..GameConfig::default() }.validate().is_ok());
    assert!(GameConfig { feedback_reset_ms: MAX_TIMER_MS, ..GameConfig::default() }
        .validate()
        .is_ok());
}

#[test]
fn fresh_probability_outside_unit_range_is_rejected() {
    assert!(rejected(GameConfig { fresh_probability: 1.5, ..GameConfig::default() }));
    assert!(rejected(GameConfig { fresh_probability: -0.1, ..GameConfig::default() }));
    assert!(rejected(GameConfig { fresh_probability: f64::NAN, ..GameConfig::default() }));
}

#[test]
fn negative_score_magnitudes_are_rejected() {
    assert!(rejected(GameConfig { fresh_bonus: -10, ..GameConfig::default() }));
    assert!(rejected(GameConfig { spoiled_penalty: -20, ..GameConfig::default() }));
}

#[test]
fn win_score_must_be_positive() {
    assert!(rejected(GameConfig { win_score: 0, ..GameConfig::default() }));
}

#[test]
fn lose_score_must_be_negative() {
    assert!(rejected(GameConfig { lose_score: 0, ..GameConfig::default() }));
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_is_a_parse_error() {
    let err = GameConfig::from_json_str(r#"{ "win_score": "#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = GameConfig::from_json_str(r#"{ "win_score": "lots" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn json_with_invalid_values_is_rejected_after_parsing() {
    let err = GameConfig::from_json_str(r#"{ "feedback_reset_ms": 18446744073709551615 }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::from_file(Path::new("/nonexistent/fresh_catch.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn config_survives_json_round_trip() {
    let config = GameConfig {
        field_width: 640.0,
        catch_margin: 4.5,
        fresh_probability: 0.25,
        win_score: 120,
        lose_score: -60,
        feedback_reset_ms: 750,
        ..GameConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
}
