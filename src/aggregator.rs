//! Concurrent fixture aggregation across competitions.
//!
//! One aggregation cycle fans out one fetch per eligible competition and
//! waits for all of them to settle. Per-competition failures contribute zero
//! fixtures; the merged output keeps catalog iteration order regardless of
//! completion order.

use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::fixtures::fetch_fixtures;
use crate::data_fetcher::models::{Competition, FixtureRecord};
use crate::date_resolver::CanonicalDate;
use crate::season_resolver::{resolve_for_date_with_today, season_is_supported};

/// Aggregates fixtures for `date` across `competitions`.
///
/// Resolves the applicable season per competition, optionally skips
/// competitions whose season falls outside `config.supported_seasons`, and
/// issues all remaining fetches concurrently. Never fails: the worst case is
/// an empty result.
pub async fn aggregate(
    client: &Client,
    config: &Config,
    competitions: &[Competition],
    date: CanonicalDate,
) -> Vec<FixtureRecord> {
    aggregate_with_today(client, config, competitions, date, CanonicalDate::today()).await
}

/// Internal variant with an injected "today" for deterministic season
/// resolution in tests.
#[instrument(skip(client, config, competitions))]
pub async fn aggregate_with_today(
    client: &Client,
    config: &Config,
    competitions: &[Competition],
    date: CanonicalDate,
    today: CanonicalDate,
) -> Vec<FixtureRecord> {
    let supported = config.supported_seasons.as_deref();

    let fetch_futures: Vec<_> = competitions
        .iter()
        .filter_map(|competition| {
            let league_id = competition.id();
            let season = resolve_for_date_with_today(competition, date, today);

            if !season_is_supported(season, supported) {
                info!(
                    "Skipping league {} ({}): season {} outside supported window",
                    league_id,
                    competition.name(),
                    season
                );
                return None;
            }

            Some(async move {
                match fetch_fixtures(client, config, league_id, season, date).await {
                    Ok(fixtures) => fixtures,
                    Err(e) => {
                        // A single source failing must never abort the cycle
                        warn!("Fixture fetch failed for league {league_id}: {e}");
                        Vec::new()
                    }
                }
            })
        })
        .collect();

    let requested = fetch_futures.len();
    // join_all preserves input order, so completion-order nondeterminism
    // never leaks into the merged output
    let results = futures::future::join_all(fetch_futures).await;

    let merged: Vec<FixtureRecord> = results.into_iter().flatten().collect();
    info!(
        "Aggregated {} fixtures from {} competitions for {}",
        merged.len(),
        requested,
        date
    );

    merged
}
