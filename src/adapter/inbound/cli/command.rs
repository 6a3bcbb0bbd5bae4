//! Command-line interface definitions.
//!
//! Defines the CLI structure for the sharpline application using `clap`.
//! Subcommands cover matchup analysis, rating tables, odds conversion,
//! Kelly sizing, and configuration inspection.

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// Elo matchup ratings and moneyline edge detection
#[derive(Parser, Debug)]
#[command(name = "sharpline")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the sharpline CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rate a matchup and compare it against live moneylines
    Analyze(AnalyzeArgs),

    /// Show the current rating table
    Ratings(RatingsArgs),

    /// Convert between American odds and probability
    Convert(ConvertArgs),

    /// Compute the Kelly fraction and stake for a single bet
    Kelly(KellyArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `sharpline config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Order of recommendations in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Keep market order, home side before away side
    #[default]
    Input,
    /// Largest edge first
    Edge,
}

/// Lookback and data-source options shared by commands that build ratings.
#[derive(Parser, Debug, Clone, Default)]
pub struct HistoryArgs {
    /// Regular-season weeks to fold into ratings (overrides config).
    #[arg(long)]
    pub weeks_back: Option<u32>,

    /// Season to read (overrides config; defaults to the current year).
    #[arg(long)]
    pub season: Option<i32>,

    /// Read games and markets from a local JSON snapshot instead of the network.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Home team (abbreviation, full name or nickname). Prompted if omitted.
    #[arg(long)]
    pub home: Option<String>,

    /// Away team (abbreviation, full name or nickname). Prompted if omitted.
    #[arg(long)]
    pub away: Option<String>,

    #[command(flatten)]
    pub history: HistoryArgs,

    /// Minimum edge in percentage points (overrides config).
    #[arg(long)]
    pub min_edge: Option<f64>,

    /// Bankroll for stake sizing (overrides config).
    #[arg(long)]
    pub bankroll: Option<Decimal>,

    /// Fraction of full Kelly to stake, in (0, 1] (overrides config).
    #[arg(long)]
    pub kelly_multiplier: Option<f64>,

    /// Order of the recommendation table.
    #[arg(long, value_enum, default_value_t = SortOrder::Input)]
    pub sort: SortOrder,
}

/// Arguments for the `ratings` subcommand.
#[derive(Parser, Debug)]
pub struct RatingsArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Show only the top N teams.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["american", "probability"])))]
pub struct ConvertArgs {
    /// American odds to convert (e.g. 120 or -150).
    #[arg(long, allow_negative_numbers = true)]
    pub american: Option<f64>,

    /// Probability to convert, strictly between 0 and 1.
    #[arg(long)]
    pub probability: Option<f64>,
}

/// Arguments for the `kelly` subcommand.
#[derive(Parser, Debug)]
pub struct KellyArgs {
    /// Your win probability, strictly between 0 and 1.
    #[arg(long)]
    pub probability: f64,

    /// Offered American odds.
    #[arg(long, allow_negative_numbers = true)]
    pub american: f64,

    /// Bankroll to size against (overrides config).
    #[arg(long)]
    pub bankroll: Option<Decimal>,

    /// Fraction of full Kelly to stake (overrides config).
    #[arg(long)]
    pub kelly_multiplier: Option<f64>,
}
