//! Provider client: typed models, authenticated HTTP, and the catalog and
//! fixtures endpoints.

pub mod catalog;
pub mod fetch_utils;
pub mod fixtures;
pub mod http_client;
pub mod models;
pub mod urls;

pub use catalog::fetch_league_catalog;
pub use fixtures::fetch_fixtures;
pub use http_client::create_http_client;
pub use models::{Competition, FixtureRecord, Season};
