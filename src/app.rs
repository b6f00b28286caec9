//! Binary orchestration: config operations, one aggregation run, and the
//! plain-text printout of the grouped result.

use crate::cli::Args;
use crate::config::Config;
use crate::date_resolver::CanonicalDate;
use crate::error::AppError;
use crate::feed::FixtureFeed;
use crate::grouping::AggregationResult;
use tracing::info;

/// Handles configuration-management flags. Returns `true` when the
/// invocation was a config operation and the app should exit.
pub async fn handle_config_ops(args: &Args) -> Result<bool, AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(true);
    }

    if args.new_api_domain.is_some() || args.new_api_key.is_some() {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_domain) = &args.new_api_domain {
            config.api_domain = new_domain.clone();
        }
        if let Some(new_key) = &args.new_api_key {
            config.api_key = new_key.clone();
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(true);
    }

    Ok(false)
}

/// Runs one aggregation cycle for the requested date and prints the board.
pub async fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;

    let mut feed = FixtureFeed::new(config).await?;
    if feed.catalog().is_empty() {
        // Catalog failure policy: nothing to show, not an error banner
        println!("No competitions available right now.");
        return Ok(());
    }

    feed.set_competition_filter(args.league);

    let date = CanonicalDate::resolve(args.date.as_deref()).advance(args.shift);
    info!("Running fixture board for {date}");

    if let Some(handle) = feed.select_date(date) {
        handle.wait().await;
    }

    match feed.latest() {
        Some(result) if !result.is_empty() => print_board(&result),
        _ => println!("No matches on {date}"),
    }

    Ok(())
}

/// Prints the grouped result as indented country / competition / fixture
/// lines. Participant and score payloads are opaque to the engine, so only
/// well-known fields are picked out, with placeholders for anything absent.
fn print_board(result: &AggregationResult) {
    println!("Fixtures for {}", result.date);

    for country in &result.countries {
        println!("\n{}", country.country);
        for group in &country.competitions {
            println!("  {}", group.competition.name);
            for fixture in &group.fixtures {
                let home = fixture.teams["home"]["name"].as_str().unwrap_or("?");
                let away = fixture.teams["away"]["name"].as_str().unwrap_or("?");
                let score = match (
                    fixture.goals["home"].as_i64(),
                    fixture.goals["away"].as_i64(),
                ) {
                    (Some(h), Some(a)) => format!("{h}-{a}"),
                    _ => "vs".to_string(),
                };
                println!("    {}  {} {} {}", fixture.fixture.date, home, score, away);
            }
        }
    }

    println!("\n{} matches total", result.fixture_count());
}
