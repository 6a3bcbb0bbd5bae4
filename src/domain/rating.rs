//! Elo-style team strength ratings.
//!
//! Ratings are folded from completed games in chronological order. Each game
//! moves both teams by `K * (actual - expected)`, where the expectation
//! includes a home-field bonus and `K` grows with the margin of victory.

use std::collections::HashMap;

use serde::Deserialize;

use super::edge::MatchupProbability;
use super::error::DomainError;
use super::game::GameOutcome;
use super::id::TeamId;
use super::odds::Probability;

/// Elo scale: a 400 point gap is 10:1 odds.
const ELO_SCALE: f64 = 400.0;

/// Rating model parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingConfig {
    /// Rating assigned to any team before its first game.
    #[serde(default = "default_initial_rating")]
    pub initial_rating: f64,
    /// Rating points added to the home side when computing expectations.
    #[serde(default = "default_home_field_advantage")]
    pub home_field_advantage: f64,
    /// Base K-factor before margin scaling.
    #[serde(default = "default_base_k")]
    pub base_k: f64,
    /// Points of margin that add one unit to the K multiplier.
    #[serde(default = "default_margin_divisor")]
    pub margin_divisor: f64,
    /// Cap on the margin term; K never exceeds `base_k * (1 + cap)`.
    #[serde(default = "default_max_margin_multiplier")]
    pub max_margin_multiplier: f64,
}

const fn default_initial_rating() -> f64 {
    1500.0
}

const fn default_home_field_advantage() -> f64 {
    55.0
}

const fn default_base_k() -> f64 {
    20.0
}

const fn default_margin_divisor() -> f64 {
    7.0
}

const fn default_max_margin_multiplier() -> f64 {
    3.0
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: default_initial_rating(),
            home_field_advantage: default_home_field_advantage(),
            base_k: default_base_k(),
            margin_divisor: default_margin_divisor(),
            max_margin_multiplier: default_max_margin_multiplier(),
        }
    }
}

/// Owned mapping from team to rating.
///
/// Teams are only ever added or updated. Lookups for unseen teams return the
/// initial rating without inserting them.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingTable {
    ratings: HashMap<TeamId, f64>,
    initial_rating: f64,
}

impl RatingTable {
    #[must_use]
    pub fn new(initial_rating: f64) -> Self {
        Self {
            ratings: HashMap::new(),
            initial_rating,
        }
    }

    /// Rating for `team`, or the initial rating if it has never played.
    #[must_use]
    pub fn get(&self, team: &TeamId) -> f64 {
        self.ratings
            .get(team)
            .copied()
            .unwrap_or(self.initial_rating)
    }

    #[must_use]
    pub fn contains(&self, team: &TeamId) -> bool {
        self.ratings.contains_key(team)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TeamId, f64)> {
        self.ratings.iter().map(|(team, rating)| (team, *rating))
    }

    /// Teams ordered from strongest to weakest, ties broken by id.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&TeamId, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    fn seed(&mut self, team: &TeamId) {
        if !self.ratings.contains_key(team) {
            self.ratings.insert(team.clone(), self.initial_rating);
        }
    }

    fn set(&mut self, team: &TeamId, rating: f64) -> Result<(), DomainError> {
        if !rating.is_finite() {
            return Err(DomainError::NonFiniteRating { team: team.clone() });
        }
        self.ratings.insert(team.clone(), rating);
        Ok(())
    }
}

/// Rating movement produced by a single game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingUpdate {
    /// Home win expectation computed from pre-game ratings.
    pub expected_home: f64,
    /// Margin-scaled K-factor applied to both teams.
    pub k: f64,
    pub home_delta: f64,
    pub away_delta: f64,
}

/// Folds game outcomes into a [`RatingTable`].
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    config: RatingConfig,
}

impl RatingEngine {
    #[must_use]
    pub const fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Build a fresh rating table from `games`.
    ///
    /// Games are folded in ascending `played_at` order regardless of the
    /// order they arrive in. Equal timestamps keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFiniteRating`] if an update diverges, which
    /// only happens with a non-finite configuration.
    pub fn build(&self, games: &[GameOutcome]) -> Result<RatingTable, DomainError> {
        let mut table = RatingTable::new(self.config.initial_rating);

        let mut ordered: Vec<&GameOutcome> = games.iter().collect();
        ordered.sort_by_key(|game| game.played_at);

        for game in ordered {
            self.apply(&mut table, game)?;
        }

        Ok(table)
    }

    /// Apply one game to `table`.
    ///
    /// Both deltas are computed from the pre-game ratings.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFiniteRating`] if either new rating is not finite.
    pub fn apply(
        &self,
        table: &mut RatingTable,
        game: &GameOutcome,
    ) -> Result<RatingUpdate, DomainError> {
        table.seed(&game.home);
        table.seed(&game.away);

        let home_rating = table.get(&game.home);
        let away_rating = table.get(&game.away);

        let expected_home = self.expectation(home_rating, away_rating);
        let actual_home = game.result().home_score();
        let k = self.k_factor(game.margin());

        let home_delta = k * (actual_home - expected_home);
        let away_delta = k * ((1.0 - actual_home) - (1.0 - expected_home));

        table.set(&game.home, home_rating + home_delta)?;
        table.set(&game.away, away_rating + away_delta)?;

        Ok(RatingUpdate {
            expected_home,
            k,
            home_delta,
            away_delta,
        })
    }

    /// Margin-scaled K: `base_k * (1 + min(cap, margin / divisor))`.
    #[must_use]
    pub fn k_factor(&self, margin: u32) -> f64 {
        let margin_term =
            (f64::from(margin) / self.config.margin_divisor).min(self.config.max_margin_multiplier);
        self.config.base_k * (1.0 + margin_term)
    }

    /// Home win expectation for a matchup using `table`'s ratings.
    #[must_use]
    pub fn expected_home_score(&self, table: &RatingTable, home: &TeamId, away: &TeamId) -> f64 {
        self.expectation(table.get(home), table.get(away))
    }

    /// Model win probabilities for both sides of a matchup.
    ///
    /// # Errors
    ///
    /// Fails if the rating gap is so large that the expectation rounds to 0 or 1.
    pub fn win_probability(
        &self,
        table: &RatingTable,
        home: &TeamId,
        away: &TeamId,
    ) -> Result<MatchupProbability, DomainError> {
        let home_p = Probability::try_new(self.expected_home_score(table, home, away))?;
        MatchupProbability::new(home_p)
    }

    fn expectation(&self, home_rating: f64, away_rating: f64) -> f64 {
        let diff = (home_rating + self.config.home_field_advantage) - away_rating;
        1.0 / (1.0 + 10f64.powf(-diff / ELO_SCALE))
    }
}
