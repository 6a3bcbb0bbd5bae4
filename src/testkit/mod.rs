//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - In-memory [`GameResultsSource`](crate::port::GameResultsSource)
//!   and [`OddsSource`](crate::port::OddsSource) implementations.
//! - [`domain`] - Builders for domain primitives: games, markets, probabilities.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod source;
