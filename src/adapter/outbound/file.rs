//! Local JSON snapshot source for offline runs.
//!
//! A snapshot holds both collaborators' data in one file:
//!
//! ```json
//! {
//!   "games": [
//!     {"home": "Kansas City Chiefs", "away": "BUF", "home_score": 27,
//!      "away_score": 20, "played_at": "2025-10-19T20:25:00Z",
//!      "season": 2025, "week": 7}
//!   ],
//!   "markets": [
//!     {"home": "KC", "away": "BUF", "book": "DraftKings",
//!      "home_price": -135, "away_price": 114}
//!   ]
//! }
//! ```
//!
//! Team names go through the registry like any provider's. `season` and
//! `week` are optional; games without them are always inside the window.
//! The file is read once per source and shared by both ports.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::domain::{AmericanOdds, BookId, GameOutcome, MatchupOdds, TeamRegistry};
use crate::error::{Error, Result};
use crate::port::{GameResultsSource, LookbackWindow, OddsSource};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub games: Vec<SnapshotGame>,
    #[serde(default)]
    pub markets: Vec<SnapshotMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotGame {
    pub home: String,
    pub away: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub played_at: DateTime<Utc>,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub week: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotMarket {
    pub home: String,
    pub away: String,
    pub book: String,
    #[serde(default)]
    pub home_price: Option<f64>,
    #[serde(default)]
    pub away_price: Option<f64>,
}

/// Serves games and markets from a snapshot file.
pub struct JsonFileSource {
    path: PathBuf,
    registry: TeamRegistry,
    snapshot: OnceCell<Snapshot>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, registry: TeamRegistry) -> Self {
        Self {
            path: path.into(),
            registry,
            snapshot: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<&Snapshot> {
        self.snapshot.get_or_try_init(|| read_snapshot(&self.path)).await
    }
}

#[async_trait]
impl GameResultsSource for JsonFileSource {
    async fn fetch_completed_games(&self, window: &LookbackWindow) -> Result<Vec<GameOutcome>> {
        let snapshot = self.load().await?;
        let games = select_games(&snapshot.games, window, &self.registry);
        info!(path = %self.path.display(), games = games.len(), "Loaded snapshot games");
        Ok(games)
    }

    fn source_name(&self) -> &'static str {
        "snapshot"
    }
}

#[async_trait]
impl OddsSource for JsonFileSource {
    async fn fetch_moneylines(&self) -> Result<Vec<MatchupOdds>> {
        let snapshot = self.load().await?;
        let markets = to_markets(&snapshot.markets, &self.registry)?;
        info!(path = %self.path.display(), markets = markets.len(), "Loaded snapshot markets");
        Ok(markets)
    }

    fn source_name(&self) -> &'static str {
        "snapshot"
    }
}

async fn read_snapshot(path: &Path) -> Result<Snapshot> {
    debug!(path = %path.display(), "Reading snapshot");
    let content = tokio::fs::read_to_string(path).await?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    if snapshot.games.is_empty() && snapshot.markets.is_empty() {
        return Err(Error::Source(format!(
            "snapshot {} has no games or markets",
            path.display()
        )));
    }
    Ok(snapshot)
}

/// Completed games inside `window`, resolved to canonical teams.
pub fn select_games(
    games: &[SnapshotGame],
    window: &LookbackWindow,
    registry: &TeamRegistry,
) -> Vec<GameOutcome> {
    let in_season = |game: &&SnapshotGame| game.season.map_or(true, |s| s == window.season);

    let current_week = games
        .iter()
        .filter(in_season)
        .filter(|game| game.home_score.is_some() && game.away_score.is_some())
        .filter_map(|game| game.week)
        .max();
    let first_week = current_week.map_or(1, |week| window.first_week(week));

    games
        .iter()
        .filter(in_season)
        .filter(|game| game.week.map_or(true, |week| week >= first_week))
        .filter_map(|game| {
            let (Some(home_score), Some(away_score)) = (game.home_score, game.away_score) else {
                return None;
            };
            let (Some(home), Some(away)) =
                (registry.resolve(&game.home), registry.resolve(&game.away))
            else {
                warn!(home = %game.home, away = %game.away, "Skipping game with unknown team");
                return None;
            };
            Some(GameOutcome::new(
                home.id.clone(),
                away.id.clone(),
                home_score,
                away_score,
                game.played_at,
            ))
        })
        .collect()
}

/// Markets resolved to canonical teams.
///
/// # Errors
///
/// A price outside the American domain is a data error in a local file and
/// fails the load rather than being dropped.
pub fn to_markets(markets: &[SnapshotMarket], registry: &TeamRegistry) -> Result<Vec<MatchupOdds>> {
    let mut resolved = Vec::with_capacity(markets.len());
    for market in markets {
        let home = registry
            .resolve(&market.home)
            .ok_or_else(|| Error::UnknownTeam(market.home.clone()))?;
        let away = registry
            .resolve(&market.away)
            .ok_or_else(|| Error::UnknownTeam(market.away.clone()))?;

        resolved.push(MatchupOdds {
            home: home.id.clone(),
            away: away.id.clone(),
            book: BookId::from(market.book.as_str()),
            home_price: market.home_price.map(AmericanOdds::try_new).transpose()?,
            away_price: market.away_price.map(AmericanOdds::try_new).transpose()?,
        });
    }
    Ok(resolved)
}
