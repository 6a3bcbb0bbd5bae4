//! Sharpline - Elo matchup ratings and moneyline edge detection.
//!
//! This crate rates teams from completed game results with a
//! margin-of-victory Elo model, converts the ratings into win probabilities
//! for a matchup, and compares them against bookmaker moneylines. Sides
//! where the model beats the market by a configured margin are returned as
//! recommendations with Kelly-sized stakes.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Pure rating, odds and edge logic; no I/O
//!   - `RatingEngine` - Elo fold over completed games
//!   - `odds` - American odds, implied probability and Kelly math
//!   - `EdgeEvaluator` - Model versus market comparison
//! - **`port`** - Traits for the two data sources
//! - **`adapter`** - ESPN scoreboard, The Odds API, JSON snapshots, and the CLI
//! - **`application`** - The matchup use case wiring sources into the core
//! - **`infrastructure`** - Configuration, logging and factories
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use sharpline::domain::{GameOutcome, RatingEngine, TeamId};
//!
//! let engine = RatingEngine::default();
//! let table = engine
//!     .build(&[GameOutcome::new("KC", "BUF", 27, 20, Utc::now())])
//!     .unwrap();
//! let p = engine
//!     .win_probability(&table, &TeamId::from("KC"), &TeamId::from("BUF"))
//!     .unwrap();
//! assert!(p.home().value() > 0.5);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
