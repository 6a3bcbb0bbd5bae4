//! Matchup service against in-memory sources.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use sharpline::application::{MatchupAnalysis, MatchupRequest, MatchupService};
use sharpline::domain::{EdgeEvaluator, RatingEngine, Side, TeamId, TeamRegistry};
use sharpline::error::Error;
use sharpline::testkit::config;
use sharpline::testkit::domain::{game, market};
use sharpline::testkit::source::{FailingSource, StaticOdds, StaticResults};

fn history() -> Vec<sharpline::domain::GameOutcome> {
    vec![
        game("KC", "LV", 31, 10, 1),
        game("BUF", "MIA", 20, 24, 2),
        game("KC", "DEN", 27, 13, 3),
    ]
}

fn service(results: StaticResults, odds: StaticOdds, min_edge: f64) -> MatchupService {
    MatchupService::new(
        Arc::new(results),
        Arc::new(odds),
        RatingEngine::new(config::rating()),
        EdgeEvaluator::new(config::edge(min_edge)),
        TeamRegistry::nfl(),
    )
}

fn request(home: &str, away: &str) -> MatchupRequest {
    MatchupRequest {
        home: home.to_string(),
        away: away.to_string(),
        window: config::window(),
    }
}

#[tokio::test]
async fn recommends_generous_underdog_price() {
    let odds = StaticOdds::new(vec![
        market("Other", "NYJ", "NE", Some(-150.0), Some(130.0)),
        market("DraftKings", "KC", "BUF", Some(150.0), Some(-170.0)),
    ]);
    let service = service(StaticResults::new(history()), odds, 1.0);

    let analysis = service
        .analyze(&request("Kansas City Chiefs", "bills"))
        .await
        .unwrap();

    let MatchupAnalysis::Recommendations {
        context,
        recommendations,
    } = analysis
    else {
        panic!("expected recommendations");
    };
    assert_eq!(context.home.id, TeamId::from("KC"));
    assert_eq!(context.away.id, TeamId::from("BUF"));
    assert_eq!(context.games, 3);
    assert_eq!(context.markets, 1);
    assert!(context.home_rating > context.away_rating);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].side, Side::Home);
    assert_eq!(recommendations[0].book.as_str(), "DraftKings");
}

#[tokio::test]
async fn reversed_home_and_away_is_no_market() {
    let odds = StaticOdds::new(vec![market("DraftKings", "KC", "BUF", Some(150.0), None)]);
    let service = service(StaticResults::new(history()), odds, 1.0);

    let analysis = service.analyze(&request("BUF", "KC")).await.unwrap();
    assert!(matches!(analysis, MatchupAnalysis::NoMarket { .. }));
}

#[tokio::test]
async fn fair_market_is_no_edge() {
    let odds = StaticOdds::new(vec![market("DraftKings", "KC", "BUF", Some(-1000.0), Some(-1000.0))]);
    let service = service(StaticResults::new(history()), odds, 1.0);

    let analysis = service.analyze(&request("KC", "BUF")).await.unwrap();
    let MatchupAnalysis::NoEdge(context) = analysis else {
        panic!("expected no edge");
    };
    assert_eq!(context.markets, 1);
}

#[tokio::test]
async fn unknown_team_fails_before_fetching() {
    let results = StaticResults::new(history());
    let calls = results.call_count();
    let service = service(results, StaticOdds::new(Vec::new()), 1.0);

    let err = service
        .analyze(&request("Kansas City", "BUF"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownTeam(ref name) if name == "Kansas City"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn same_team_is_invalid_matchup() {
    let service = service(
        StaticResults::new(history()),
        StaticOdds::new(Vec::new()),
        1.0,
    );
    let err = service.analyze(&request("KC", "chiefs")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidMatchup(_)));
}

#[tokio::test]
async fn source_failure_propagates() {
    let service = MatchupService::new(
        Arc::new(StaticResults::new(history())),
        Arc::new(FailingSource::new("odds feed down")),
        RatingEngine::default(),
        EdgeEvaluator::default(),
        TeamRegistry::nfl(),
    );
    let err = service.analyze(&request("KC", "BUF")).await.unwrap_err();
    assert!(matches!(err, Error::Source(ref msg) if msg == "odds feed down"));
}

#[tokio::test]
async fn ratings_pass_the_window_through() {
    let results = Arc::new(StaticResults::new(history()));
    let service = MatchupService::new(
        results.clone(),
        Arc::new(StaticOdds::new(Vec::new())),
        RatingEngine::default(),
        EdgeEvaluator::default(),
        TeamRegistry::nfl(),
    );

    let table = service.ratings(&config::window()).await.unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(results.last_window(), Some(config::window()));
}
