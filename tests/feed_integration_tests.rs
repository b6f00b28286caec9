use std::time::Duration;

use matchboard::config::Config;
use matchboard::date_resolver::CanonicalDate;
use matchboard::feed::FixtureFeed;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> Config {
    Config {
        api_domain: server.uri(),
        api_key: "test-key".to_string(),
        allowed_competition_ids: vec![82],
        ..Config::default()
    }
}

fn date(s: &str) -> CanonicalDate {
    CanonicalDate::parse(s).expect("valid test date")
}

/// Catalog payload: three eligible competitions (two by name, one by
/// allow-list) and one that must be filtered out. Every eligible one carries
/// a current-flagged 2024 season spanning the test dates.
fn leagues_body() -> serde_json::Value {
    let seasons = json!([
        {"year": 2023, "start": "2023-08-01", "end": "2024-06-01", "current": false},
        {"year": 2024, "start": "2024-08-01", "end": "2025-06-01", "current": true}
    ]);

    json!({
        "response": [
            {
                "league": {"id": 44, "name": "Women's Super League", "type": "League"},
                "country": {"name": "England", "code": "GB"},
                "seasons": seasons.clone()
            },
            {
                "league": {"id": 39, "name": "Premier League", "type": "League"},
                "country": {"name": "England", "code": "GB"},
                "seasons": seasons.clone()
            },
            {
                "league": {"id": 140, "name": "Primera División Femenina", "type": "League"},
                "country": {"name": "Spain", "code": "ES"},
                "seasons": seasons.clone()
            },
            {
                "league": {"id": 82, "name": "Toppserien", "type": "League"},
                "country": {"name": "Norway", "code": "NO"},
                "seasons": seasons.clone()
            }
        ]
    })
}

fn fixture_body(fixture_id: i64, league_id: u32, league: &str, country: &str) -> serde_json::Value {
    json!({
        "response": [{
            "fixture": {"id": fixture_id, "date": "2025-03-08T15:00:00+00:00", "status": {"short": "NS"}},
            "league": {"id": league_id, "name": league, "country": country, "season": 2024},
            "teams": {"home": {"name": "Home"}, "away": {"name": "Away"}},
            "goals": {"home": null, "away": null}
        }]
    })
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/leagues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(leagues_body()))
        .mount(server)
        .await;
}

async fn mount_fixtures(
    server: &MockServer,
    league_id: u32,
    league: &str,
    country: &str,
    fixture_id: i64,
) {
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("league", league_id.to_string()))
        .and(query_param("season", "2024"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture_body(fixture_id, league_id, league, country)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_cycle_groups_by_country_in_catalog_order() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    // Eligible catalog sorts case-insensitively by name:
    // Primera División Femenina, Toppserien, Women's Super League
    mount_fixtures(&server, 140, "Primera División Femenina", "Spain", 1).await;
    mount_fixtures(&server, 82, "Toppserien", "Norway", 2).await;
    mount_fixtures(&server, 44, "Women's Super League", "England", 3).await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    assert_eq!(feed.catalog().len(), 3, "Premier League must be filtered out");

    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await, "cycle result must be applied");

    let result = feed.latest().expect("result");
    assert_eq!(result.date, date("2025-03-08"));

    let countries: Vec<&str> = result.countries.iter().map(|c| c.country.as_str()).collect();
    assert_eq!(countries, vec!["Spain", "Norway", "England"]);
    assert_eq!(result.fixture_count(), 3);
}

#[tokio::test]
async fn test_per_competition_failure_contributes_zero_fixtures() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_fixtures(&server, 140, "Primera División Femenina", "Spain", 1).await;
    // Toppserien (82) errors; 404 is terminal, no retry
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("league", "82"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_fixtures(&server, 44, "Women's Super League", "England", 3).await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await);

    let result = feed.latest().expect("result");
    let countries: Vec<&str> = result.countries.iter().map(|c| c.country.as_str()).collect();
    assert_eq!(countries, vec!["Spain", "England"]);
    assert_eq!(result.fixture_count(), 2);
}

#[tokio::test]
async fn test_rapid_date_change_newer_result_wins() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    // The older date responds slowly for every league
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("date", "2025-03-08"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture_body(1, 44, "Women's Super League", "England"))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    // The newer date responds immediately
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("date", "2025-03-09"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture_body(2, 44, "Women's Super League", "England")),
        )
        .mount(&server)
        .await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    let slow = feed.select_date(date("2025-03-08")).expect("first date");
    let fast = feed.select_date(date("2025-03-09")).expect("second date");

    let fast_applied = fast.wait().await;
    let slow_applied = slow.wait().await;

    assert!(fast_applied, "newest cycle must be applied");
    assert!(!slow_applied, "superseded cycle must be discarded");

    let result = feed.latest().expect("result");
    assert_eq!(result.date, date("2025-03-09"));
}

#[tokio::test]
async fn test_selecting_same_date_twice_is_a_noop() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_fixtures(&server, 140, "Primera División Femenina", "Spain", 1).await;
    mount_fixtures(&server, 82, "Toppserien", "Norway", 2).await;
    mount_fixtures(&server, 44, "Women's Super League", "England", 3).await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");

    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await);
    assert!(
        feed.select_date(date("2025-03-08")).is_none(),
        "unchanged date must not issue a new cycle"
    );
    assert_eq!(feed.selected_date(), Some(date("2025-03-08")));
}

#[tokio::test]
async fn test_competition_filter_narrows_aggregation() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_fixtures(&server, 140, "Primera División Femenina", "Spain", 1).await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    feed.set_competition_filter(Some(140));

    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await);

    let result = feed.latest().expect("result");
    assert_eq!(result.countries.len(), 1);
    assert_eq!(result.countries[0].country, "Spain");
    assert_eq!(result.fixture_count(), 1);
}

#[tokio::test]
async fn test_filter_change_reruns_cycle_for_selected_date() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_fixtures(&server, 140, "Primera División Femenina", "Spain", 1).await;
    mount_fixtures(&server, 82, "Toppserien", "Norway", 2).await;
    mount_fixtures(&server, 44, "Women's Super League", "England", 3).await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await);
    assert_eq!(feed.latest().expect("result").fixture_count(), 3);

    // Narrowing the filter re-runs aggregation even though the date is
    // unchanged, so the display never keeps serving the wider result.
    let handle = feed
        .set_competition_filter(Some(140))
        .expect("changed filter starts a cycle");
    assert!(handle.wait().await);

    let result = feed.latest().expect("result");
    assert_eq!(result.countries.len(), 1);
    assert_eq!(result.countries[0].country, "Spain");
    assert_eq!(result.fixture_count(), 1);

    // Re-applying the same filter is a no-op
    assert!(feed.set_competition_filter(Some(140)).is_none());

    // Clearing it restores the full aggregation
    let handle = feed.set_competition_filter(None).expect("cleared filter");
    assert!(handle.wait().await);
    assert_eq!(feed.latest().expect("result").fixture_count(), 3);
}

#[tokio::test]
async fn test_filter_change_without_selected_date_starts_no_cycle() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    assert!(feed.set_competition_filter(Some(140)).is_none());
    assert!(feed.latest().is_none());
}

#[tokio::test]
async fn test_provider_auth_headers_are_attached() {
    let server = MockServer::start().await;
    let host = server
        .uri()
        .strip_prefix("http://")
        .expect("mock server uri is http")
        .to_string();
    // Only requests carrying the key/host pair get a catalog back
    Mock::given(method("GET"))
        .and(path("/leagues"))
        .and(header("x-rapidapi-key", "test-key"))
        .and(header("x-rapidapi-host", host.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(leagues_body()))
        .mount(&server)
        .await;

    let feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    assert_eq!(
        feed.catalog().len(),
        3,
        "authenticated catalog request must succeed"
    );
}

#[tokio::test]
async fn test_catalog_failure_yields_empty_feed_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leagues"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let feed = FixtureFeed::new(test_config(&server)).await.expect("feed");
    assert!(feed.catalog().is_empty());
    assert!(feed.latest().is_none());
}

#[tokio::test]
async fn test_supported_seasons_window_skips_competitions() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    // No fixtures endpoints mounted: every fetch would 404, but none should
    // be issued because all resolved seasons (2024) fall outside the window.

    let config = Config {
        supported_seasons: Some(vec![2022]),
        ..test_config(&server)
    };
    let mut feed = FixtureFeed::new(config).await.expect("feed");

    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await);

    let result = feed.latest().expect("result");
    assert!(result.is_empty());
    assert_eq!(
        server.received_requests().await.map(|r| r.len()),
        Some(1),
        "only the catalog request may hit the provider"
    );
}

#[tokio::test]
async fn test_timezone_is_forwarded_when_configured() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("timezone", "Europe/London"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture_body(1, 44, "Women's Super League", "England")),
        )
        .mount(&server)
        .await;

    let config = Config {
        timezone: Some("Europe/London".to_string()),
        ..test_config(&server)
    };
    let mut feed = FixtureFeed::new(config).await.expect("feed");
    feed.set_competition_filter(Some(44));

    let handle = feed.select_date(date("2025-03-08")).expect("new date");
    assert!(handle.wait().await);
    assert_eq!(feed.latest().expect("result").fixture_count(), 1);
}
