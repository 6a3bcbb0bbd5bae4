//! Moneyline market quotes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::{BookId, TeamId};
use super::odds::AmericanOdds;

/// Which side of a two-way market a quote prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home ML"),
            Self::Away => write!(f, "Away ML"),
        }
    }
}

/// One book's price for one side. `price` is `None` when the side is not offered.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuote {
    pub book: BookId,
    pub side: Side,
    pub price: Option<AmericanOdds>,
}

/// A bookmaker's two-way moneyline for a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupOdds {
    pub home: TeamId,
    pub away: TeamId,
    pub book: BookId,
    #[serde(default)]
    pub home_price: Option<AmericanOdds>,
    #[serde(default)]
    pub away_price: Option<AmericanOdds>,
}

impl MatchupOdds {
    /// True if this market prices exactly `home` hosting `away`.
    #[must_use]
    pub fn is_matchup(&self, home: &TeamId, away: &TeamId) -> bool {
        &self.home == home && &self.away == away
    }

    /// Split into per-side quotes, home first.
    #[must_use]
    pub fn quotes(&self) -> [MarketQuote; 2] {
        [
            MarketQuote {
                book: self.book.clone(),
                side: Side::Home,
                price: self.home_price,
            },
            MarketQuote {
                book: self.book.clone(),
                side: Side::Away,
                price: self.away_price,
            },
        ]
    }
}
