//! ESPN scoreboard adapter for historical results.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::{select_window, to_outcomes, EspnScoreboardClient};
pub use settings::EspnConfig;
