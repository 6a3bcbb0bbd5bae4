//! CLI module graph.

pub mod analyze;
pub mod command;
pub mod config;
pub mod convert;
pub mod history;
pub mod output;
pub mod paths;
pub mod ratings;
