//! The Odds API REST client.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::dto::{OddsEvent, H2H_MARKET};
use super::settings::OddsApiConfig;
use crate::adapter::outbound::http::JsonHttp;
use crate::domain::{AmericanOdds, BookId, MatchupOdds, TeamRegistry};
use crate::error::{ConfigError, Result};
use crate::port::OddsSource;

/// Fetches live moneylines from The Odds API.
pub struct OddsApiClient {
    http: JsonHttp,
    config: OddsApiConfig,
    api_key: String,
    registry: TeamRegistry,
}

impl OddsApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no API key is configured.
    pub fn new(config: OddsApiConfig, http: JsonHttp, registry: TeamRegistry) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "ODDS_API_KEY",
            })?;

        Ok(Self {
            http,
            config,
            api_key,
            registry,
        })
    }

    fn odds_url(&self) -> String {
        format!(
            "{}/sports/{}/odds",
            self.config.base_url.trim_end_matches('/'),
            self.config.sport
        )
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_moneylines(&self) -> Result<Vec<MatchupOdds>> {
        let query = [
            ("apiKey", self.api_key.clone()),
            ("regions", self.config.regions.clone()),
            ("markets", H2H_MARKET.to_string()),
            ("oddsFormat", "american".to_string()),
        ];
        let events: Vec<OddsEvent> = self.http.get_json(&self.odds_url(), &query).await?;
        let markets = to_matchup_odds(&events, &self.registry);

        info!(
            events = events.len(),
            markets = markets.len(),
            sport = %self.config.sport,
            "Fetched moneylines"
        );
        Ok(markets)
    }

    fn source_name(&self) -> &'static str {
        "the-odds-api"
    }
}

/// Flatten provider events into one [`MatchupOdds`] per event and bookmaker.
///
/// Events with teams the registry does not know are skipped. A side with no
/// outcome, or with a price outside the American domain, becomes `None`.
pub fn to_matchup_odds(events: &[OddsEvent], registry: &TeamRegistry) -> Vec<MatchupOdds> {
    let mut markets = Vec::new();

    for event in events {
        let (Some(home), Some(away)) = (
            registry.resolve(&event.home_team),
            registry.resolve(&event.away_team),
        ) else {
            warn!(
                home = %event.home_team,
                away = %event.away_team,
                "Skipping event with unknown team"
            );
            continue;
        };

        for bookmaker in &event.bookmakers {
            for market in bookmaker.markets.iter().filter(|m| m.key == H2H_MARKET) {
                debug!(book = %bookmaker.key, home = %home.id, away = %away.id, "h2h market");
                markets.push(MatchupOdds {
                    home: home.id.clone(),
                    away: away.id.clone(),
                    book: BookId::from(bookmaker.title.as_str()),
                    home_price: checked_price(market.price_for(&event.home_team), &bookmaker.title),
                    away_price: checked_price(market.price_for(&event.away_team), &bookmaker.title),
                });
            }
        }
    }

    markets
}

fn checked_price(price: Option<f64>, book: &str) -> Option<AmericanOdds> {
    let price = price?;
    match AmericanOdds::try_new(price) {
        Ok(odds) => Some(odds),
        Err(err) => {
            warn!(book, error = %err, "Discarding invalid price");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<OddsEvent> {
        serde_json::from_str(
            r#"[
                {
                    "id": "abc",
                    "sport_key": "americanfootball_nfl",
                    "commence_time": "2025-11-02T18:00:00Z",
                    "home_team": "Kansas City Chiefs",
                    "away_team": "Buffalo Bills",
                    "bookmakers": [
                        {
                            "key": "draftkings",
                            "title": "DraftKings",
                            "markets": [
                                {
                                    "key": "h2h",
                                    "outcomes": [
                                        {"name": "Kansas City Chiefs", "price": -135},
                                        {"name": "Buffalo Bills", "price": 114}
                                    ]
                                },
                                {
                                    "key": "spreads",
                                    "outcomes": [
                                        {"name": "Kansas City Chiefs", "price": -110, "point": -2.5}
                                    ]
                                }
                            ]
                        },
                        {
                            "key": "oddball",
                            "title": "Oddball",
                            "markets": [
                                {
                                    "key": "h2h",
                                    "outcomes": [
                                        {"name": "Kansas City Chiefs", "price": 50}
                                    ]
                                }
                            ]
                        },
                        {
                            "key": "extreme",
                            "title": "Extreme",
                            "markets": [
                                {
                                    "key": "h2h",
                                    "outcomes": [
                                        {"name": "Kansas City Chiefs", "price": -1e19},
                                        {"name": "Buffalo Bills", "price": 900}
                                    ]
                                }
                            ]
                        }
                    ]
                },
                {
                    "home_team": "London Monarchs",
                    "away_team": "Buffalo Bills",
                    "bookmakers": []
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_flattens_h2h_markets_only() {
        let markets = to_matchup_odds(&events(), &TeamRegistry::nfl());

        assert_eq!(markets.len(), 3);
        assert_eq!(markets[0].book.as_str(), "DraftKings");
        assert_eq!(markets[0].home.as_str(), "KC");
        assert_eq!(markets[0].away.as_str(), "BUF");
        assert_eq!(markets[0].home_price.unwrap().value(), -135.0);
        assert_eq!(markets[0].away_price.unwrap().value(), 114.0);
    }

    #[test]
    fn test_invalid_and_missing_prices_become_none() {
        let markets = to_matchup_odds(&events(), &TeamRegistry::nfl());

        assert_eq!(markets[1].book.as_str(), "Oddball");
        assert!(markets[1].home_price.is_none());
        assert!(markets[1].away_price.is_none());
    }

    #[test]
    fn test_price_implying_certainty_is_dropped_not_fatal() {
        let markets = to_matchup_odds(&events(), &TeamRegistry::nfl());

        assert_eq!(markets[2].book.as_str(), "Extreme");
        assert!(markets[2].home_price.is_none());
        assert_eq!(markets[2].away_price.unwrap().value(), 900.0);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let http = JsonHttp::from_config(&Default::default());
        let result = OddsApiClient::new(OddsApiConfig::default(), http, TeamRegistry::nfl());
        assert!(result.is_err());
    }
}
