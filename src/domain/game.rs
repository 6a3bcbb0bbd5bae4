//! Completed game results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TeamId;

/// Result of a game from the home team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    HomeWin,
    AwayWin,
    Tie,
}

impl GameResult {
    /// Actual score used by the rating update: 1.0, 0.0 or 0.5.
    #[must_use]
    pub const fn home_score(self) -> f64 {
        match self {
            Self::HomeWin => 1.0,
            Self::AwayWin => 0.0,
            Self::Tie => 0.5,
        }
    }
}

/// A completed, played game.
///
/// Games without both scores never become a `GameOutcome`; adapters drop
/// them before the rating fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub home: TeamId,
    pub away: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub played_at: DateTime<Utc>,
}

impl GameOutcome {
    pub fn new(
        home: impl Into<TeamId>,
        away: impl Into<TeamId>,
        home_score: u32,
        away_score: u32,
        played_at: DateTime<Utc>,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score,
            away_score,
            played_at,
        }
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => GameResult::HomeWin,
            std::cmp::Ordering::Less => GameResult::AwayWin,
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Absolute point differential.
    #[must_use]
    pub fn margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }
}
