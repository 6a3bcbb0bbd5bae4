//! The Odds API adapter for live moneylines.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::{to_matchup_odds, OddsApiClient};
pub use settings::OddsApiConfig;
