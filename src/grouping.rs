//! Grouping of merged fixtures into the nested presentation structure.
//!
//! A single linear pass arranges fixtures by country, then competition,
//! preserving first-seen order at both levels. Nothing is sorted; order
//! within a bucket is aggregation order.

use std::collections::HashMap;

use crate::constants::{FALLBACK_COMPETITION_ID, FALLBACK_COUNTRY};
use crate::data_fetcher::models::{FixtureLeague, FixtureRecord};
use crate::date_resolver::CanonicalDate;

/// Fixtures of one competition, in aggregation order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionGroup {
    pub competition: FixtureLeague,
    pub fixtures: Vec<FixtureRecord>,
}

/// Competitions of one country, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryGroup {
    pub country: String,
    pub competitions: Vec<CompetitionGroup>,
}

/// The grouped outcome of one aggregation cycle. Immutable once produced;
/// a new date or filter yields a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub date: CanonicalDate,
    pub countries: Vec<CountryGroup>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn fixture_count(&self) -> usize {
        self.countries
            .iter()
            .flat_map(|c| &c.competitions)
            .map(|g| g.fixtures.len())
            .sum()
    }
}

/// Groups `fixtures` by country, then competition id. Fixtures without a
/// country land in the "Other" bucket; a missing competition id maps to `0`.
/// Linear in the number of fixtures and referentially transparent.
pub fn group(date: CanonicalDate, fixtures: &[FixtureRecord]) -> AggregationResult {
    let mut countries: Vec<CountryGroup> = Vec::new();
    let mut country_index: HashMap<String, usize> = HashMap::new();
    let mut competition_index: HashMap<(usize, u32), usize> = HashMap::new();

    for fixture in fixtures {
        let country = fixture
            .league
            .country
            .clone()
            .unwrap_or_else(|| FALLBACK_COUNTRY.to_string());

        let country_slot = *country_index.entry(country.clone()).or_insert_with(|| {
            countries.push(CountryGroup {
                country,
                competitions: Vec::new(),
            });
            countries.len() - 1
        });

        let league_id = fixture.league.id.unwrap_or(FALLBACK_COMPETITION_ID);
        let group_slot = *competition_index
            .entry((country_slot, league_id))
            .or_insert_with(|| {
                countries[country_slot].competitions.push(CompetitionGroup {
                    competition: fixture.league.clone(),
                    fixtures: Vec::new(),
                });
                countries[country_slot].competitions.len() - 1
            });

        countries[country_slot].competitions[group_slot]
            .fixtures
            .push(fixture.clone());
    }

    AggregationResult { date, countries }
}
