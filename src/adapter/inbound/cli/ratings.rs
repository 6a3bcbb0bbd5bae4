//! Handler for the `ratings` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::RatingsArgs;
use super::{history, output};
use crate::domain::{RatingTable, TeamId, TeamRegistry};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory;

#[derive(Tabled)]
struct RatingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Abbr")]
    id: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

fn rows(table: &RatingTable, registry: &TeamRegistry, top: Option<usize>) -> Vec<RatingRow> {
    table
        .ranked()
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(index, (id, rating))| RatingRow {
            rank: index + 1,
            team: registry.display_name(id),
            id: id.to_string(),
            rating: format!("{rating:.1}"),
        })
        .collect()
}

/// Execute `ratings`.
pub async fn execute(config: Config, args: RatingsArgs) -> Result<()> {
    let window = history::window(&config, &args.history)?;
    let service = factory::build_ratings_service(&config, args.history.snapshot.as_deref());

    let spinner = output::spinner("Fetching completed games...");
    let table = match service.ratings(&window).await {
        Ok(table) => {
            output::spinner_success(&spinner, "Ratings built");
            table
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Fetch failed");
            return Err(err);
        }
    };

    let rows = rows(&table, service.registry(), args.top);

    if output::is_json() {
        let teams: Vec<_> = rows
            .iter()
            .map(|row| {
                json!({
                    "rank": row.rank,
                    "team": row.id,
                    "name": row.team,
                    "rating": table.get(&TeamId::from(row.id.as_str())),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "ratings",
            "season": window.season,
            "weeks_back": window.weeks_back,
            "teams": teams,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!(
        "Ratings, {} season, last {} weeks",
        window.season, window.weeks_back
    ));
    if rows.is_empty() {
        output::note("No completed games in the window");
        return Ok(());
    }
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
