//! Edge detection between model and market.
//!
//! For every quoted side, the edge is the model probability minus the
//! market-implied probability, in percentage points. Sides whose edge meets
//! the configured minimum become [`Recommendation`]s sized by Kelly.
//!
//! Recommendations come back in input order (markets as supplied, home side
//! before away side). Ranking by edge is left to the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{BookId, TeamId};
use super::odds::{american_to_probability, kelly_fraction, kelly_stake, AmericanOdds, Probability};
use super::quote::{MarketQuote, MatchupOdds, Side};

/// Model win probabilities for both sides of a two-outcome matchup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchupProbability {
    home: Probability,
    away: Probability,
}

impl MatchupProbability {
    /// Build from the home probability; the away side is its complement.
    ///
    /// # Errors
    ///
    /// Fails when `1 - home` rounds onto a boundary.
    pub fn new(home: Probability) -> Result<Self, DomainError> {
        Ok(Self {
            home,
            away: home.complement()?,
        })
    }

    #[must_use]
    pub const fn home(&self) -> Probability {
        self.home
    }

    #[must_use]
    pub const fn away(&self) -> Probability {
        self.away
    }

    #[must_use]
    pub const fn side(&self, side: Side) -> Probability {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// Thresholds and bankroll for edge evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeConfig {
    /// Minimum edge in percentage points (1.0 = one point over the market).
    #[serde(default = "default_min_edge_pct")]
    pub min_edge_pct: f64,
    /// Bankroll the Kelly fraction is applied to.
    #[serde(default = "default_bankroll")]
    pub bankroll: Decimal,
    /// Fraction of full Kelly to stake (1.0 = full Kelly).
    #[serde(default = "default_kelly_multiplier")]
    pub kelly_multiplier: f64,
}

const fn default_min_edge_pct() -> f64 {
    1.0
}

fn default_bankroll() -> Decimal {
    Decimal::from(100)
}

const fn default_kelly_multiplier() -> f64 {
    1.0
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            min_edge_pct: default_min_edge_pct(),
            bankroll: default_bankroll(),
            kelly_multiplier: default_kelly_multiplier(),
        }
    }
}

/// A side worth betting, with its suggested stake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub book: BookId,
    pub side: Side,
    pub team: TeamId,
    pub price: AmericanOdds,
    pub model_probability: Probability,
    pub implied_probability: Probability,
    /// Model minus implied probability, in percentage points.
    pub edge_pct: f64,
    /// Full-Kelly fraction before the configured multiplier.
    pub kelly_fraction: f64,
    pub stake: Decimal,
}

/// Compares model probabilities against market quotes.
#[derive(Debug, Clone, Default)]
pub struct EdgeEvaluator {
    config: EdgeConfig,
}

impl EdgeEvaluator {
    #[must_use]
    pub const fn new(config: EdgeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EdgeConfig {
        &self.config
    }

    /// Evaluate every market for a matchup.
    ///
    /// # Errors
    ///
    /// Propagates [`DomainError`] from implied-probability conversion.
    pub fn evaluate(
        &self,
        probability: &MatchupProbability,
        markets: &[MatchupOdds],
    ) -> Result<Vec<Recommendation>, DomainError> {
        let mut recommendations = Vec::new();
        for market in markets {
            recommendations.extend(self.evaluate_quotes(
                probability,
                &market.quotes(),
                &market.home,
                &market.away,
            )?);
        }
        Ok(recommendations)
    }

    /// Evaluate individual quotes, preserving their order.
    ///
    /// # Errors
    ///
    /// Propagates [`DomainError`] from implied-probability conversion.
    pub fn evaluate_quotes(
        &self,
        probability: &MatchupProbability,
        quotes: &[MarketQuote],
        home: &TeamId,
        away: &TeamId,
    ) -> Result<Vec<Recommendation>, DomainError> {
        let mut recommendations = Vec::new();
        for quote in quotes {
            let team = match quote.side {
                Side::Home => home,
                Side::Away => away,
            };
            if let Some(rec) = self.evaluate_quote(probability.side(quote.side), quote, team)? {
                recommendations.push(rec);
            }
        }
        Ok(recommendations)
    }

    fn evaluate_quote(
        &self,
        model: Probability,
        quote: &MarketQuote,
        team: &TeamId,
    ) -> Result<Option<Recommendation>, DomainError> {
        let (Some(price), Some(implied)) = (quote.price, american_to_probability(quote.price)?)
        else {
            return Ok(None);
        };

        let edge_pct = (model.value() - implied.value()) * 100.0;
        if edge_pct < self.config.min_edge_pct {
            return Ok(None);
        }

        let fraction = kelly_fraction(model, Some(price));
        let stake = kelly_stake(fraction * self.config.kelly_multiplier, self.config.bankroll);

        Ok(Some(Recommendation {
            book: quote.book.clone(),
            side: quote.side,
            team: team.clone(),
            price,
            model_probability: model,
            implied_probability: implied,
            edge_pct,
            kelly_fraction: fraction,
            stake,
        }))
    }
}
