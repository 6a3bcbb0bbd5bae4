//! Handlers for the `convert` and `kelly` commands.
//!
//! Both are pure calculators over the odds math and never touch the network.

use rust_decimal::Decimal;
use serde_json::json;

use super::command::{ConvertArgs, KellyArgs};
use super::output;
use crate::domain::{
    kelly_fraction, kelly_stake, probability_to_american, AmericanOdds, EdgeConfig, Probability,
};
use crate::error::Result;
use crate::infrastructure::config::settings::validate_edge;

/// Execute `convert`.
#[allow(clippy::result_large_err)]
pub fn execute_convert(args: &ConvertArgs) -> Result<()> {
    if let Some(value) = args.american {
        let odds = AmericanOdds::try_new(value)?;
        let implied = odds.implied_probability()?;
        if output::is_json() {
            output::json_output(json!({
                "command": "convert",
                "american": odds,
                "decimal": odds.to_decimal(),
                "implied_probability": implied,
            }));
            return Ok(());
        }
        output::section("Conversion");
        output::field("American", odds);
        output::field("Decimal", format!("{:.3}", odds.to_decimal()));
        output::field(
            "Implied",
            output::highlight(format!("{:.2}%", implied.value() * 100.0)),
        );
        return Ok(());
    }

    if let Some(value) = args.probability {
        let probability = Probability::try_new(value)?;
        let fair = probability_to_american(probability)?;
        if output::is_json() {
            output::json_output(json!({
                "command": "convert",
                "probability": probability,
                "fair_american": fair,
                "decimal": fair.to_decimal(),
            }));
            return Ok(());
        }
        output::section("Conversion");
        output::field(
            "Probability",
            format!("{:.2}%", probability.value() * 100.0),
        );
        output::field("Fair odds", output::highlight(fair));
        output::field("Decimal", format!("{:.3}", fair.to_decimal()));
    }
    Ok(())
}

/// Execute `kelly`.
#[allow(clippy::result_large_err)]
pub fn execute_kelly(args: &KellyArgs, defaults: &EdgeConfig) -> Result<()> {
    let edge = EdgeConfig {
        bankroll: args.bankroll.unwrap_or(defaults.bankroll),
        kelly_multiplier: args.kelly_multiplier.unwrap_or(defaults.kelly_multiplier),
        ..defaults.clone()
    };
    validate_edge(&edge)?;

    let probability = Probability::try_new(args.probability)?;
    let odds = AmericanOdds::try_new(args.american)?;
    let implied = odds.implied_probability()?;
    let fraction = kelly_fraction(probability, Some(odds));
    let stake: Decimal = kelly_stake(fraction * edge.kelly_multiplier, edge.bankroll);
    let edge_pct = (probability.value() - implied.value()) * 100.0;

    if output::is_json() {
        output::json_output(json!({
            "command": "kelly",
            "probability": probability,
            "american": odds,
            "implied_probability": implied,
            "edge_pct": edge_pct,
            "kelly_fraction": fraction,
            "kelly_multiplier": edge.kelly_multiplier,
            "bankroll": edge.bankroll,
            "stake": stake,
        }));
        return Ok(());
    }

    output::section("Kelly");
    output::field("Odds", odds);
    output::field("Implied", format!("{:.2}%", implied.value() * 100.0));
    let edge_label = format!("{edge_pct:+.2}");
    output::field(
        "Edge",
        if edge_pct > 0.0 {
            output::positive(edge_label)
        } else {
            output::negative(edge_label)
        },
    );
    output::field("Fraction", format!("{:.4}", fraction));
    output::field("Stake", output::highlight(format!("${stake}")));
    if fraction == 0.0 {
        output::hint("no positive edge at this price; Kelly says pass");
    }
    Ok(())
}
