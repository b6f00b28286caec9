//! Serde models for the fixtures data provider.
//!
//! Catalog and season shapes are typed with required vs optional fields made
//! explicit; participant and score payloads on fixtures are deliberately kept
//! opaque (`serde_json::Value`) because the engine passes them through
//! unmodified.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Competition kind as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionKind {
    League,
    Cup,
}

/// Core identity of a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CompetitionKind,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Country block attached to a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

/// A year-labeled period of a competition.
///
/// The provider does not guarantee seasons to be sorted or deduplicated, and
/// start/end may be absent or malformed; accessors parse lazily and the
/// season resolver treats unparsable intervals per its fallback ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub year: i32,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub current: bool,
}

impl Season {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }
}

/// One catalog entry: a competition, its country, and its season history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub league: LeagueInfo,
    #[serde(default)]
    pub country: Option<CountryInfo>,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl Competition {
    pub fn id(&self) -> u32 {
        self.league.id
    }

    pub fn name(&self) -> &str {
        &self.league.name
    }
}

/// Envelope for the `/leagues` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaguesResponse {
    #[serde(default)]
    pub response: Vec<Competition>,
}

/// Identity and kickoff of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub status: Value,
}

/// Competition reference carried on a fixture. Country and id may be absent;
/// grouping substitutes its fallback buckets for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureLeague {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub round: Option<String>,
}

/// One fixture as returned by the provider. Teams, goals and score data are
/// opaque to the engine and passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub fixture: FixtureInfo,
    pub league: FixtureLeague,
    #[serde(default)]
    pub teams: Value,
    #[serde(default)]
    pub goals: Value,
    #[serde(default)]
    pub score: Value,
}

/// Envelope for the `/fixtures` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<FixtureRecord>,
}
