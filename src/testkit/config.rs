//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use rust_decimal::Decimal;

use crate::domain::{EdgeConfig, RatingConfig};
use crate::port::LookbackWindow;

/// Default rating parameters (1500 start, 55 HFA, K 20).
pub fn rating() -> RatingConfig {
    RatingConfig::default()
}

/// Edge config with the given threshold on a 100 unit bankroll at full Kelly.
pub fn edge(min_edge_pct: f64) -> EdgeConfig {
    EdgeConfig {
        min_edge_pct,
        bankroll: Decimal::from(100),
        kelly_multiplier: 1.0,
    }
}

/// A full-season lookback for 2024.
pub fn window() -> LookbackWindow {
    LookbackWindow::new(2024, 18)
}
