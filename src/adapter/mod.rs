//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface.
//! - [`outbound`] - Driven side: scoreboard, odds and snapshot sources.

pub mod inbound;
pub mod outbound;
