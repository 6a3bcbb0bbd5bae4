//! Handler for the `analyze` command.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::{AnalyzeArgs, SortOrder};
use super::{history, output};
use crate::application::{MatchupAnalysis, MatchupContext, MatchupRequest};
use crate::domain::{probability_to_american, EdgeConfig, Recommendation, TeamRegistry};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{validate_edge, Config, ODDS_API_KEY_ENV};
use crate::infrastructure::factory;

#[derive(Tabled)]
struct RecommendationRow {
    #[tabled(rename = "Book")]
    book: String,
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Edge %")]
    edge: String,
    #[tabled(rename = "Kelly stake")]
    stake: String,
}

impl RecommendationRow {
    fn new(rec: &Recommendation, registry: &TeamRegistry) -> Self {
        Self {
            book: rec.book.to_string(),
            side: rec.side.to_string(),
            team: registry.display_name(&rec.team),
            odds: rec.price.to_string(),
            model: percent(rec.model_probability.value()),
            edge: format!("{:+.2}", rec.edge_pct),
            stake: format!("${}", rec.stake),
        }
    }
}

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Execute `analyze`.
pub async fn execute(mut config: Config, args: AnalyzeArgs) -> Result<()> {
    let edge = edge_overrides(&config.edge, &args)?;
    let window = history::window(&config, &args.history)?;
    let snapshot = args.history.snapshot.as_deref();

    let home = team_or_prompt(args.home, "home", "Home team")?;
    let away = team_or_prompt(args.away, "away", "Away team")?;

    if snapshot.is_none() && config.odds_api.api_key.is_none() {
        config.odds_api.api_key = Some(prompt_api_key()?);
    }

    let service = factory::build_matchup_service(&config, edge.clone(), snapshot)?;
    let request = MatchupRequest { home, away, window };

    let spinner = output::spinner("Fetching results and odds...");
    let analysis = match service.analyze(&request).await {
        Ok(analysis) => {
            output::spinner_success(&spinner, "Data loaded");
            analysis
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Fetch failed");
            return Err(err);
        }
    };

    if output::is_json() {
        output::json_output(analysis_json(&analysis, &edge, args.sort)?);
        return Ok(());
    }

    let registry = service.registry();
    output::header(env!("CARGO_PKG_VERSION"));
    match analysis {
        MatchupAnalysis::NoMarket { home, away } => {
            output::warning(&format!(
                "No moneyline market found for {} @ {}",
                away.name, home.name
            ));
            output::hint("check the home/away order or try again closer to kickoff");
        }
        MatchupAnalysis::NoEdge(context) => {
            render_context(&context);
            output::section("Recommendations");
            output::note(&format!(
                "No side clears the {:.2} point edge threshold",
                edge.min_edge_pct
            ));
        }
        MatchupAnalysis::Recommendations {
            context,
            mut recommendations,
        } => {
            render_context(&context);
            sort(&mut recommendations, args.sort);
            output::section("Recommendations");
            let rows: Vec<_> = recommendations
                .iter()
                .map(|rec| RecommendationRow::new(rec, registry))
                .collect();
            output::lines(&Table::new(rows).to_string());
            if edge.kelly_multiplier < 1.0 {
                output::note(&format!(
                    "Stakes use {:.2}x Kelly on a ${} bankroll",
                    edge.kelly_multiplier, edge.bankroll
                ));
            }
        }
    }
    Ok(())
}

/// Apply CLI overrides to the configured edge settings.
#[allow(clippy::result_large_err)]
fn edge_overrides(base: &EdgeConfig, args: &AnalyzeArgs) -> Result<EdgeConfig> {
    let edge = EdgeConfig {
        min_edge_pct: args.min_edge.unwrap_or(base.min_edge_pct),
        bankroll: args.bankroll.unwrap_or(base.bankroll),
        kelly_multiplier: args.kelly_multiplier.unwrap_or(base.kelly_multiplier),
    };
    validate_edge(&edge)?;
    Ok(edge)
}

fn sort(recommendations: &mut [Recommendation], order: SortOrder) {
    if order == SortOrder::Edge {
        recommendations.sort_by(|a, b| b.edge_pct.total_cmp(&a.edge_pct));
    }
}

#[allow(clippy::result_large_err)]
fn team_or_prompt(value: Option<String>, field: &'static str, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if output::is_json() || !std::io::stdin().is_terminal() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let team: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(team)
}

#[allow(clippy::result_large_err)]
fn prompt_api_key() -> Result<String> {
    if output::is_json() || !std::io::stdin().is_terminal() {
        return Err(ConfigError::MissingField {
            field: ODDS_API_KEY_ENV,
        }
        .into());
    }
    output::note(&format!("{ODDS_API_KEY_ENV} is not set"));
    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("The Odds API key")
        .interact()?;
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(ConfigError::MissingField {
            field: ODDS_API_KEY_ENV,
        }
        .into());
    }
    Ok(key)
}

fn render_context(context: &MatchupContext) {
    let probability = context.probability;
    output::section("Matchup");
    output::field(
        "Home",
        format!("{} ({})", context.home.name, context.home.id),
    );
    output::field(
        "Away",
        format!("{} ({})", context.away.name, context.away.id),
    );
    output::field(
        "Ratings",
        format!("{:.1} vs {:.1}", context.home_rating, context.away_rating),
    );
    output::field(
        "Model",
        format!(
            "{} {} / {} {}",
            context.home.id,
            output::highlight(percent(probability.home().value())),
            context.away.id,
            output::highlight(percent(probability.away().value())),
        ),
    );
    if let (Ok(home), Ok(away)) = (
        probability_to_american(probability.home()),
        probability_to_american(probability.away()),
    ) {
        output::field("Fair odds", format!("{home} / {away}"));
    }
    output::field(
        "Data",
        output::muted(format!(
            "{} games, {} markets",
            context.games, context.markets
        )),
    );
}

#[allow(clippy::result_large_err)]
fn analysis_json(
    analysis: &MatchupAnalysis,
    edge: &EdgeConfig,
    order: SortOrder,
) -> Result<serde_json::Value> {
    let value = match analysis {
        MatchupAnalysis::NoMarket { home, away } => json!({
            "command": "analyze",
            "status": "no_market",
            "home": home,
            "away": away,
        }),
        MatchupAnalysis::NoEdge(context) => json!({
            "command": "analyze",
            "status": "no_edge",
            "min_edge_pct": edge.min_edge_pct,
            "matchup": context_json(context),
            "recommendations": [],
        }),
        MatchupAnalysis::Recommendations {
            context,
            recommendations,
        } => {
            let mut recommendations = recommendations.clone();
            sort(&mut recommendations, order);
            json!({
                "command": "analyze",
                "status": "recommendations",
                "min_edge_pct": edge.min_edge_pct,
                "matchup": context_json(context),
                "recommendations": serde_json::to_value(&recommendations)?,
            })
        }
    };
    Ok(value)
}

fn context_json(context: &MatchupContext) -> serde_json::Value {
    json!({
        "home": context.home,
        "away": context.away,
        "home_rating": context.home_rating,
        "away_rating": context.away_rating,
        "probability": context.probability,
        "games": context.games,
        "markets": context.markets,
    })
}
