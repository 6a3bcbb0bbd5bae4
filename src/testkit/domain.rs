//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions so tests focus on assertions rather
//! than construction boilerplate. All builders panic on invalid input.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{
    AmericanOdds, BookId, GameOutcome, MatchupOdds, MatchupProbability, Probability, TeamId,
};

/// Kickoff of week 1 in the 2024 fixture season.
pub fn season_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 8, 17, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Kickoff `week` weeks after [`season_start`] (week 1 is the start).
pub fn kickoff(week: u32) -> DateTime<Utc> {
    season_start() + Duration::weeks(i64::from(week.saturating_sub(1)))
}

/// A completed game played in `week`.
pub fn game(home: &str, away: &str, home_score: u32, away_score: u32, week: u32) -> GameOutcome {
    GameOutcome::new(home, away, home_score, away_score, kickoff(week))
}

/// A validated probability.
pub fn prob(value: f64) -> Probability {
    Probability::try_new(value).expect("valid probability")
}

/// Validated American odds.
pub fn odds(value: f64) -> AmericanOdds {
    AmericanOdds::try_new(value).expect("valid American odds")
}

/// Model probabilities with `home` for the home side.
pub fn matchup(home: f64) -> MatchupProbability {
    MatchupProbability::new(prob(home)).expect("valid matchup probability")
}

/// One book's two-way moneyline market. `None` leaves a side unpriced.
pub fn market(
    book: &str,
    home: &str,
    away: &str,
    home_price: Option<f64>,
    away_price: Option<f64>,
) -> MatchupOdds {
    MatchupOdds {
        home: TeamId::from(home),
        away: TeamId::from(away),
        book: BookId::from(book),
        home_price: home_price.map(odds),
        away_price: away_price.map(odds),
    }
}
