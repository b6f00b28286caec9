//! Women's Football Fixtures Aggregation Library
//!
//! This library decides, for a user-selected calendar date, which curated
//! competitions to show, which season of each competition applies on that
//! date, and fetches and merges the per-competition fixture sets into one
//! consistently grouped result - tolerating per-source failures and rapid
//! date changes.
//!
//! # Examples
//!
//! ```rust,no_run
//! use matchboard::config::Config;
//! use matchboard::date_resolver::CanonicalDate;
//! use matchboard::feed::FixtureFeed;
//! use matchboard::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let mut feed = FixtureFeed::new(config).await?;
//!
//!     // Resolve the date (falls back to today for bad input) and run a cycle
//!     let date = CanonicalDate::resolve(Some("2025-03-08"));
//!     if let Some(handle) = feed.select_date(date) {
//!         handle.wait().await;
//!     }
//!
//!     if let Some(result) = feed.latest() {
//!         for country in &result.countries {
//!             println!("{}: {} competitions", country.country, country.competitions.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod date_resolver;
pub mod error;
pub mod feed;
pub mod grouping;
pub mod logging;
pub mod season_resolver;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Competition, FixtureRecord, Season};
pub use date_resolver::CanonicalDate;
pub use error::AppError;
pub use feed::{CycleHandle, FixtureFeed, Generation, ResultSlot};
pub use grouping::{AggregationResult, CompetitionGroup, CountryGroup, group};
pub use season_resolver::resolve_for_date;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
