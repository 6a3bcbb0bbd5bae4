//! ESPN scoreboard configuration.

use serde::Deserialize;

/// Connection settings for the ESPN public scoreboard.
#[derive(Debug, Clone, Deserialize)]
pub struct EspnConfig {
    /// Sport/league base URL; `/scoreboard` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of weeks in the regular season.
    #[serde(default = "default_regular_season_weeks")]
    pub regular_season_weeks: u32,
}

fn default_base_url() -> String {
    "https://site.api.espn.com/apis/site/v2/sports/football/nfl".into()
}

const fn default_regular_season_weeks() -> u32 {
    18
}

impl Default for EspnConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            regular_season_weeks: default_regular_season_weeks(),
        }
    }
}
