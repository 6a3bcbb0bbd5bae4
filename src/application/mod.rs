//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod matchup;

pub use matchup::{MatchupAnalysis, MatchupContext, MatchupRequest, MatchupService};
