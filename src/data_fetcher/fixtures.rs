//! Per-competition fixture fetching.

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_fetcher::fetch_utils::fetch;
use crate::data_fetcher::models::{FixtureRecord, FixturesResponse};
use crate::data_fetcher::urls::build_fixtures_url;
use crate::date_resolver::CanonicalDate;
use crate::error::AppError;

/// Fetches the fixtures of one competition for a date in a given season.
///
/// Failure handling is the caller's policy: the aggregator treats an `Err`
/// here as zero fixtures contributed by this competition.
#[instrument(skip(client, config))]
pub async fn fetch_fixtures(
    client: &Client,
    config: &Config,
    league_id: u32,
    season: i32,
    date: CanonicalDate,
) -> Result<Vec<FixtureRecord>, AppError> {
    let url = build_fixtures_url(
        &config.api_domain,
        season,
        &date.to_string(),
        league_id,
        config.timezone.as_deref(),
    );

    let response = fetch::<FixturesResponse>(client, &url).await?;
    info!(
        "Fetched {} fixtures for league {} season {} on {}",
        response.response.len(),
        league_id,
        season,
        date
    );

    Ok(response.response)
}
