use clap::Parser;
use tracing::debug;

use sharpline::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use sharpline::adapter::inbound::cli::output::{self, OutputConfig};
use sharpline::adapter::inbound::cli::{analyze, config, convert, ratings};
use sharpline::error::Result;
use sharpline::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(err) = run(cli).await {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // `config` commands report on the file themselves, including load errors.
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let settings = Config::load_or_default(&cli.config)?;
    init_logging(&settings, cli.verbose, cli.quiet);
    debug!(path = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Analyze(args) => analyze::execute(settings, args).await,
        Commands::Ratings(args) => ratings::execute(settings, args).await,
        Commands::Convert(args) => convert::execute_convert(&args),
        Commands::Kelly(args) => convert::execute_kelly(&args, &settings.edge),
        Commands::Config(_) => Ok(()),
    }
}

/// `-v` raises the configured level; `--quiet` keeps only errors.
fn init_logging(settings: &Config, verbose: u8, quiet: bool) {
    let logging = match (quiet, verbose) {
        (true, _) => settings.logging.with_level("error"),
        (false, 0) => settings.logging.clone(),
        (false, 1) => settings.logging.with_level("info"),
        (false, 2) => settings.logging.with_level("debug"),
        (false, _) => settings.logging.with_level("trace"),
    };
    logging.init();
}
