//! Outbound adapters (driven side).

pub mod espn;
pub mod file;
pub mod http;
pub mod odds_api;
