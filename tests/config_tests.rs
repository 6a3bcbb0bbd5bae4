use std::io::Write;

use rust_decimal_macros::dec;
use sharpline::error::{ConfigError, Error};
use sharpline::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

fn expect_invalid(toml: &str, expected: &str) {
    let file = write_temp_config(toml);
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue { field, .. })) if field == expected => {}
        Err(err) => panic!("Expected invalid {expected}, got {err}"),
        Ok(_) => panic!("Expected {expected} to be rejected"),
    }
}

#[test]
fn config_loads_every_section() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[rating]
initial_rating = 1400.0
home_field_advantage = 48.0
base_k = 24.0
margin_divisor = 6.0
max_margin_multiplier = 2.0

[edge]
min_edge_pct = 2.5
bankroll = "250.50"
kelly_multiplier = 0.5

[history]
weeks_back = 6
season = 2024

[odds_api]
sport = "americanfootball_ncaaf"
regions = "us,eu"

[http]
timeout_ms = 10000
retry_max_attempts = 5
"#;
    let file = write_temp_config(toml);
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.rating.initial_rating, 1400.0);
    assert_eq!(config.rating.base_k, 24.0);
    assert_eq!(config.edge.bankroll, dec!(250.50));
    assert_eq!(config.edge.kelly_multiplier, 0.5);
    assert_eq!(config.history.season, Some(2024));
    assert_eq!(config.odds_api.sport, "americanfootball_ncaaf");
    assert_eq!(config.odds_api.base_url, "https://api.the-odds-api.com/v4");
    assert_eq!(config.http.retry_max_attempts, 5);
}

#[test]
fn config_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.rating.home_field_advantage, 55.0);
    assert_eq!(config.edge.min_edge_pct, 1.0);
}

#[test]
fn config_load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[rating\nbase_k = 20");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_rejects_non_positive_k() {
    expect_invalid("[rating]\nbase_k = 0.0\n", "base_k");
}

#[test]
fn config_rejects_zero_margin_divisor() {
    expect_invalid("[rating]\nmargin_divisor = 0.0\n", "margin_divisor");
}

#[test]
fn config_rejects_negative_margin_cap() {
    expect_invalid("[rating]\nmax_margin_multiplier = -1.0\n", "max_margin_multiplier");
}

#[test]
fn config_rejects_zero_bankroll() {
    expect_invalid("[edge]\nbankroll = \"0\"\n", "bankroll");
}

#[test]
fn config_rejects_zero_timeout() {
    expect_invalid("[http]\ntimeout_ms = 0\n", "timeout_ms");
}

#[test]
fn config_rejects_empty_odds_url() {
    let file = write_temp_config("[odds_api]\nbase_url = \"\"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField {
            field: "odds_api.base_url"
        }))
    ));
}
