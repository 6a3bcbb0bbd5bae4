//! Factory functions for building the matchup pipeline.
//!
//! Constructs fully-configured data sources and services from application
//! configuration. A snapshot path replaces both network providers with the
//! local JSON file.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::espn::EspnScoreboardClient;
use crate::adapter::outbound::file::JsonFileSource;
use crate::adapter::outbound::http::JsonHttp;
use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::application::MatchupService;
use crate::domain::{EdgeConfig, EdgeEvaluator, RatingEngine, TeamRegistry};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{GameResultsSource, OddsSource};

/// Build the historical results source.
#[must_use]
pub fn build_results_source(config: &Config, snapshot: Option<&Path>) -> Arc<dyn GameResultsSource> {
    let registry = TeamRegistry::nfl();
    match snapshot {
        Some(path) => {
            info!(path = %path.display(), "Using snapshot for results");
            Arc::new(JsonFileSource::new(path, registry))
        }
        None => Arc::new(EspnScoreboardClient::new(
            config.scores.clone(),
            JsonHttp::from_config(&config.http),
            registry,
        )),
    }
}

/// Build the live odds source.
///
/// # Errors
///
/// Fails when the network provider is selected without an API key.
pub fn build_odds_source(config: &Config, snapshot: Option<&Path>) -> Result<Arc<dyn OddsSource>> {
    let registry = TeamRegistry::nfl();
    match snapshot {
        Some(path) => {
            info!(path = %path.display(), "Using snapshot for odds");
            Ok(Arc::new(JsonFileSource::new(path, registry)))
        }
        None => Ok(Arc::new(OddsApiClient::new(
            config.odds_api.clone(),
            JsonHttp::from_config(&config.http),
            registry,
        )?)),
    }
}

/// Build the matchup service with `edge` overriding the configured edge settings.
///
/// # Errors
///
/// Propagates [`build_odds_source`] failures.
pub fn build_matchup_service(
    config: &Config,
    edge: EdgeConfig,
    snapshot: Option<&Path>,
) -> Result<MatchupService> {
    let (results, odds): (Arc<dyn GameResultsSource>, Arc<dyn OddsSource>) = match snapshot {
        Some(path) => {
            info!(path = %path.display(), "Using snapshot for results and odds");
            let source = Arc::new(JsonFileSource::new(path, TeamRegistry::nfl()));
            let results: Arc<dyn GameResultsSource> = source.clone();
            let odds: Arc<dyn OddsSource> = source;
            (results, odds)
        }
        None => (
            build_results_source(config, None),
            build_odds_source(config, None)?,
        ),
    };
    Ok(MatchupService::new(
        results,
        odds,
        RatingEngine::new(config.rating.clone()),
        EdgeEvaluator::new(edge),
        TeamRegistry::nfl(),
    ))
}

/// Build a service that only needs results (e.g. for rating tables).
#[must_use]
pub fn build_ratings_service(config: &Config, snapshot: Option<&Path>) -> MatchupService {
    let results = build_results_source(config, snapshot);
    let odds: Arc<dyn OddsSource> = Arc::new(NoOdds);
    MatchupService::new(
        results,
        odds,
        RatingEngine::new(config.rating.clone()),
        EdgeEvaluator::new(config.edge.clone()),
        TeamRegistry::nfl(),
    )
}

/// Odds source for commands that never fetch odds.
struct NoOdds;

#[async_trait::async_trait]
impl OddsSource for NoOdds {
    async fn fetch_moneylines(&self) -> Result<Vec<crate::domain::MatchupOdds>> {
        Ok(Vec::new())
    }

    fn source_name(&self) -> &'static str {
        "none"
    }
}
