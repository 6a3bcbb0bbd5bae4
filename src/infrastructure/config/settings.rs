//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `ODDS_API_KEY`. Every section has defaults, so an
//! empty file (or no file at all) is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use sharpline::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::espn::EspnConfig;
use crate::adapter::outbound::http::HttpConfig;
use crate::adapter::outbound::odds_api::OddsApiConfig;
use crate::domain::{EdgeConfig, RatingConfig};
use crate::error::{ConfigError, Result};

/// Environment variable holding The Odds API key.
pub const ODDS_API_KEY_ENV: &str = "ODDS_API_KEY";

/// Which games feed the ratings.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Trailing regular-season weeks to fold.
    #[serde(default = "default_weeks_back")]
    pub weeks_back: u32,
    /// Season to read; the current UTC year when unset.
    #[serde(default)]
    pub season: Option<i32>,
}

const fn default_weeks_back() -> u32 {
    10
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            weeks_back: default_weeks_back(),
            season: None,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Rating model parameters.
    #[serde(default)]
    pub rating: RatingConfig,

    /// Edge threshold, bankroll and Kelly multiplier.
    #[serde(default)]
    pub edge: EdgeConfig,

    /// Lookback window for historical results.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Live odds provider.
    #[serde(default)]
    pub odds_api: OddsApiConfig,

    /// Historical scores provider.
    #[serde(default)]
    pub scores: EspnConfig,

    /// Shared HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key from the `ODDS_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // API key comes from the environment, never from the config file.
        config.odds_api.api_key = std::env::var(ODDS_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let rating = &self.rating;
        if !rating.initial_rating.is_finite() {
            return Err(invalid("initial_rating", "must be finite"));
        }
        if !rating.home_field_advantage.is_finite() {
            return Err(invalid("home_field_advantage", "must be finite"));
        }
        if !(rating.base_k.is_finite() && rating.base_k > 0.0) {
            return Err(invalid("base_k", "must be greater than 0"));
        }
        if !(rating.margin_divisor.is_finite() && rating.margin_divisor > 0.0) {
            return Err(invalid("margin_divisor", "must be greater than 0"));
        }
        if !(rating.max_margin_multiplier.is_finite() && rating.max_margin_multiplier >= 0.0) {
            return Err(invalid("max_margin_multiplier", "must be 0 or greater"));
        }

        validate_edge(&self.edge)?;

        if self.history.weeks_back == 0 {
            return Err(invalid("weeks_back", "must be at least 1"));
        }
        if self.odds_api.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "odds_api.base_url",
            }
            .into());
        }
        if self.odds_api.sport.is_empty() {
            return Err(ConfigError::MissingField {
                field: "odds_api.sport",
            }
            .into());
        }
        if self.scores.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "scores.base_url",
            }
            .into());
        }
        if self.scores.regular_season_weeks == 0 {
            return Err(invalid("regular_season_weeks", "must be at least 1"));
        }
        if self.http.timeout_ms == 0 {
            return Err(invalid("timeout_ms", "must be greater than 0"));
        }
        if self.http.retry_max_attempts == 0 {
            return Err(invalid("retry_max_attempts", "must be at least 1"));
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// Validate edge settings; also used for CLI overrides.
#[allow(clippy::result_large_err)]
pub fn validate_edge(edge: &EdgeConfig) -> Result<()> {
    if !edge.min_edge_pct.is_finite() {
        return Err(invalid("min_edge_pct", "must be finite"));
    }
    if edge.bankroll <= Decimal::ZERO {
        return Err(invalid("bankroll", "must be greater than 0"));
    }
    if !(edge.kelly_multiplier > 0.0 && edge.kelly_multiplier <= 1.0) {
        return Err(invalid("kelly_multiplier", "must be in (0, 1]"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}
