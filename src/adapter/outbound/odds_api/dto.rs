//! The Odds API response types.

use serde::Deserialize;

/// Market key for two-way moneylines.
pub const H2H_MARKET: &str = "h2h";

/// One upcoming event with all bookmaker prices.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsEvent {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<OddsBookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsBookmaker {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub markets: Vec<OddsMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsOutcome>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsOutcome {
    pub name: String,
    pub price: f64,
}

impl OddsMarket {
    /// Price quoted for the outcome named `team`, if any.
    #[must_use]
    pub fn price_for(&self, team: &str) -> Option<f64> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.name == team)
            .map(|outcome| outcome.price)
    }
}
