//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, ODDS_API_KEY_ENV};

/// Execute `config show`.
///
/// A missing file shows the built-in defaults.
#[allow(clippy::result_large_err)]
pub fn execute_show(path: &Path) -> Result<()> {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "(defaults)".to_string()
    };
    let config = Config::load_or_default(path)?;
    let api_key = if config.odds_api.api_key.is_some() {
        "set"
    } else {
        "not set"
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source,
            "logging": { "level": config.logging.level, "format": config.logging.format },
            "rating": {
                "initial_rating": config.rating.initial_rating,
                "home_field_advantage": config.rating.home_field_advantage,
                "base_k": config.rating.base_k,
                "margin_divisor": config.rating.margin_divisor,
                "max_margin_multiplier": config.rating.max_margin_multiplier,
            },
            "edge": {
                "min_edge_pct": config.edge.min_edge_pct,
                "bankroll": config.edge.bankroll,
                "kelly_multiplier": config.edge.kelly_multiplier,
            },
            "history": {
                "weeks_back": config.history.weeks_back,
                "season": config.history.season,
            },
            "odds_api": {
                "base_url": config.odds_api.base_url,
                "sport": config.odds_api.sport,
                "regions": config.odds_api.regions,
                "api_key": api_key,
            },
            "scores": {
                "base_url": config.scores.base_url,
                "regular_season_weeks": config.scores.regular_season_weeks,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source);
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);

    output::section("Rating");
    output::field("Initial", config.rating.initial_rating);
    output::field("Home field", config.rating.home_field_advantage);
    output::field("Base K", config.rating.base_k);
    output::field("Margin div", config.rating.margin_divisor);
    output::field("Margin cap", config.rating.max_margin_multiplier);

    output::section("Edge");
    output::field("Min edge", format!("{} pts", config.edge.min_edge_pct));
    output::field("Bankroll", format!("${}", config.edge.bankroll));
    output::field("Kelly mult", config.edge.kelly_multiplier);

    output::section("History");
    output::field("Weeks back", config.history.weeks_back);
    output::field(
        "Season",
        config
            .history
            .season
            .map_or_else(|| "current".to_string(), |season| season.to_string()),
    );

    output::section("Sources");
    output::field("Odds API", &config.odds_api.base_url);
    output::field("Sport", &config.odds_api.sport);
    output::field("Regions", &config.odds_api.regions);
    output::field(ODDS_API_KEY_ENV, api_key);
    output::field("Scores", &config.scores.base_url);
    Ok(())
}

/// Execute `config validate`.
#[allow(clippy::result_large_err)]
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }
    output::success(&format!("{} is valid", path.display()));
    Ok(())
}
