//! League catalog: fetch, eligibility filter, and ordering.
//!
//! The catalog is fetched once per refresh and is independent of the selected
//! date. A provider failure here is never fatal; callers get an empty list
//! and must treat it as "nothing to show yet".

use reqwest::Client;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::constants::WOMENS_NAME_TOKENS;
use crate::data_fetcher::fetch_utils::fetch;
use crate::data_fetcher::models::{Competition, LeaguesResponse};
use crate::data_fetcher::urls::build_leagues_url;

/// Fetches the competition catalog and reduces it to the curated eligible
/// subset, sorted by display name (case-insensitive).
///
/// Errors are logged and swallowed: an unreachable provider or a malformed
/// payload yields an empty catalog, not an application error.
#[instrument(skip(client, config))]
pub async fn fetch_league_catalog(client: &Client, config: &Config) -> Vec<Competition> {
    let url = build_leagues_url(&config.api_domain);

    let competitions = match fetch::<LeaguesResponse>(client, &url).await {
        Ok(response) => response.response,
        Err(e) => {
            error!("Failed to fetch league catalog: {e}");
            return Vec::new();
        }
    };

    let total = competitions.len();
    let mut eligible: Vec<Competition> = competitions
        .into_iter()
        .filter(|c| is_eligible(c.name(), c.id(), &config.allowed_competition_ids))
        .collect();

    eligible.sort_by_cached_key(|c| c.name().to_lowercase());

    info!(
        "League catalog: {} eligible of {} competitions",
        eligible.len(),
        total
    );

    eligible
}

/// A competition is eligible when its name contains a women's-football token
/// (case-insensitive) or its id is on the curated allow-list.
pub fn is_eligible(name: &str, id: u32, allowed_ids: &[u32]) -> bool {
    let lowered = name.to_lowercase();
    WOMENS_NAME_TOKENS.iter().any(|token| lowered.contains(token)) || allowed_ids.contains(&id)
}
