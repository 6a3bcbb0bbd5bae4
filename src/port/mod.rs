//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! data providers.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                           ┌───────────┐
//! │ Results │                                           │   Odds    │
//! │ Adapter │                                           │  Adapter  │
//! └─────────┘                                           └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`GameResultsSource`] - Completed games for the rating fold
//! - [`OddsSource`] - Current two-way moneyline markets

pub mod outbound;

pub use outbound::odds::OddsSource;
pub use outbound::results::{GameResultsSource, LookbackWindow};
