//! The Odds API configuration.

use serde::Deserialize;

/// Connection settings for The Odds API v4.
///
/// The API key is never read from the config file; it comes from the
/// `ODDS_API_KEY` environment variable (or an interactive prompt).
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// REST base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sport key, e.g. `americanfootball_nfl`.
    #[serde(default = "default_sport")]
    pub sport: String,
    /// Bookmaker regions, comma separated.
    #[serde(default = "default_regions")]
    pub regions: String,
    /// API key loaded from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_sport() -> String {
    "americanfootball_nfl".into()
}

fn default_regions() -> String {
    "us".into()
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sport: default_sport(),
            regions: default_regions(),
            api_key: None,
        }
    }
}
