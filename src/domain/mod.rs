//! Sport-agnostic rating, odds and edge logic.
//!
//! Everything in this module is synchronous and pure: it consumes already
//! fetched games and quotes and never performs I/O.

pub mod edge;
pub mod error;
pub mod game;
pub mod id;
pub mod odds;
pub mod quote;
pub mod rating;
pub mod team;

pub use edge::{EdgeConfig, EdgeEvaluator, MatchupProbability, Recommendation};
pub use error::DomainError;
pub use game::{GameOutcome, GameResult};
pub use id::{BookId, TeamId};
pub use odds::{
    american_to_probability, kelly_fraction, kelly_stake, probability_to_american, AmericanOdds,
    Probability,
};
pub use quote::{MarketQuote, MatchupOdds, Side};
pub use rating::{RatingConfig, RatingEngine, RatingTable, RatingUpdate};
pub use team::{Team, TeamRegistry};
