//! Matchup analysis use case.
//!
//! Wires the two data sources into the rating and edge core:
//!
//! ```text
//! GameResultsSource --> RatingEngine --> RatingTable --+
//!                                                      +--> EdgeEvaluator --> Recommendations
//! OddsSource ---------> matchup filter --> markets ----+
//! ```
//!
//! Both sources are awaited up front; the core then runs synchronously on
//! the resolved data. Source failures abort the call before any rating or
//! edge state exists.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    EdgeEvaluator, MatchupOdds, MatchupProbability, RatingEngine, RatingTable, Recommendation,
    Team, TeamRegistry,
};
use crate::error::{Error, Result};
use crate::port::{GameResultsSource, LookbackWindow, OddsSource};

/// A matchup to analyze, as the user typed it.
#[derive(Debug, Clone)]
pub struct MatchupRequest {
    pub home: String,
    pub away: String,
    pub window: LookbackWindow,
}

/// Model view of a matchup that has at least one market.
#[derive(Debug, Clone)]
pub struct MatchupContext {
    pub home: Team,
    pub away: Team,
    pub home_rating: f64,
    pub away_rating: f64,
    pub probability: MatchupProbability,
    /// Games folded into the ratings.
    pub games: usize,
    /// Bookmaker markets found for the matchup.
    pub markets: usize,
}

/// Outcome of a matchup analysis.
///
/// "No market" and "no edge" are both normal results and stay distinct.
#[derive(Debug, Clone)]
pub enum MatchupAnalysis {
    /// The odds feed has no market for this home/away pairing.
    NoMarket { home: Team, away: Team },
    /// Markets exist but none clears the edge threshold.
    NoEdge(MatchupContext),
    /// At least one side clears the threshold; input order is preserved.
    Recommendations {
        context: MatchupContext,
        recommendations: Vec<Recommendation>,
    },
}

/// Rating and edge pipeline over pluggable data sources.
pub struct MatchupService {
    results: Arc<dyn GameResultsSource>,
    odds: Arc<dyn OddsSource>,
    engine: RatingEngine,
    evaluator: EdgeEvaluator,
    registry: TeamRegistry,
}

impl MatchupService {
    pub fn new(
        results: Arc<dyn GameResultsSource>,
        odds: Arc<dyn OddsSource>,
        engine: RatingEngine,
        evaluator: EdgeEvaluator,
        registry: TeamRegistry,
    ) -> Self {
        Self {
            results,
            odds,
            engine,
            evaluator,
            registry,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    /// Build ratings for `window`.
    pub async fn ratings(&self, window: &LookbackWindow) -> Result<RatingTable> {
        let games = self.results.fetch_completed_games(window).await?;
        let table = self.engine.build(&games)?;
        info!(
            source = self.results.source_name(),
            games = games.len(),
            teams = table.len(),
            "Built ratings"
        );
        Ok(table)
    }

    /// Rate both teams and compare against every market for the matchup.
    pub async fn analyze(&self, request: &MatchupRequest) -> Result<MatchupAnalysis> {
        let home = self.resolve(&request.home)?;
        let away = self.resolve(&request.away)?;
        if home.id == away.id {
            return Err(Error::InvalidMatchup(format!(
                "{} cannot play itself",
                home.name
            )));
        }

        let (games, all_markets) = tokio::try_join!(
            self.results.fetch_completed_games(&request.window),
            self.odds.fetch_moneylines(),
        )?;
        debug!(
            results = self.results.source_name(),
            odds = self.odds.source_name(),
            games = games.len(),
            markets = all_markets.len(),
            "Sources resolved"
        );

        let markets: Vec<MatchupOdds> = all_markets
            .into_iter()
            .filter(|market| market.is_matchup(&home.id, &away.id))
            .collect();
        if markets.is_empty() {
            info!(home = %home.id, away = %away.id, "No market for matchup");
            return Ok(MatchupAnalysis::NoMarket { home, away });
        }

        let table = self.engine.build(&games)?;
        let probability = self.engine.win_probability(&table, &home.id, &away.id)?;
        let recommendations = self.evaluator.evaluate(&probability, &markets)?;

        let context = MatchupContext {
            home_rating: table.get(&home.id),
            away_rating: table.get(&away.id),
            home,
            away,
            probability,
            games: games.len(),
            markets: markets.len(),
        };

        info!(
            home = %context.home.id,
            away = %context.away.id,
            p_home = context.probability.home().value(),
            markets = context.markets,
            recommendations = recommendations.len(),
            "Evaluated matchup"
        );

        if recommendations.is_empty() {
            Ok(MatchupAnalysis::NoEdge(context))
        } else {
            Ok(MatchupAnalysis::Recommendations {
                context,
                recommendations,
            })
        }
    }

    fn resolve(&self, name: &str) -> Result<Team> {
        self.registry
            .resolve(name)
            .cloned()
            .ok_or_else(|| Error::UnknownTeam(name.trim().to_string()))
    }
}
