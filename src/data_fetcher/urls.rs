//! URL building utilities for provider endpoints

/// Builds the URL for fetching the full competition catalog.
///
/// # Example
/// ```
/// use matchboard::data_fetcher::urls::build_leagues_url;
///
/// let url = build_leagues_url("https://v3.football.api-sports.io");
/// assert_eq!(url, "https://v3.football.api-sports.io/leagues");
/// ```
pub fn build_leagues_url(api_domain: &str) -> String {
    format!("{api_domain}/leagues")
}

/// Builds the URL for fetching one competition's fixtures on a date.
/// The timezone parameter is optional and appended only when configured.
///
/// # Example
/// ```
/// use matchboard::data_fetcher::urls::build_fixtures_url;
///
/// let url = build_fixtures_url("https://v3.football.api-sports.io", 2024, "2025-03-08", 44, None);
/// assert_eq!(
///     url,
///     "https://v3.football.api-sports.io/fixtures?season=2024&date=2025-03-08&league=44"
/// );
///
/// let url = build_fixtures_url(
///     "https://v3.football.api-sports.io",
///     2024,
///     "2025-03-08",
///     44,
///     Some("Europe/London"),
/// );
/// assert!(url.ends_with("&timezone=Europe/London"));
/// ```
pub fn build_fixtures_url(
    api_domain: &str,
    season: i32,
    date: &str,
    league_id: u32,
    timezone: Option<&str>,
) -> String {
    let mut url = format!("{api_domain}/fixtures?season={season}&date={date}&league={league_id}");
    if let Some(tz) = timezone {
        url.push_str(&format!("&timezone={tz}"));
    }
    url
}
