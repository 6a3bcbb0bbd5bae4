//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use sharpline::domain::error::DomainError;
//! use sharpline::domain::odds::{AmericanOdds, Probability};
//!
//! // American odds never fall strictly between -100 and +100
//! assert!(matches!(
//!     AmericanOdds::try_new(50.0),
//!     Err(DomainError::InvalidAmericanOdds { .. })
//! ));
//!
//! // Probabilities live on the open interval (0, 1)
//! assert!(matches!(
//!     Probability::try_new(1.0),
//!     Err(DomainError::ProbabilityOutOfRange { .. })
//! ));
//! ```

use thiserror::Error;

use super::id::TeamId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Probability must lie strictly between 0 and 1.
    #[error("probability must be in the open interval (0, 1), got {value}")]
    ProbabilityOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// American odds must be finite and at least +100 or at most -100.
    #[error("american odds must be >= +100 or <= -100, got {value}")]
    InvalidAmericanOdds {
        /// The rejected value.
        value: f64,
    },

    /// A rating update produced a value outside the finite reals.
    #[error("rating for {team} is no longer finite")]
    NonFiniteRating {
        /// The team whose rating diverged.
        team: TeamId,
    },
}
