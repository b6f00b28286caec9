//! Season resolution: which season of a competition applies on a date.
//!
//! The provider's season lists are unordered and sometimes incomplete, and a
//! freshly finished season may not have its successor flagged `current` yet.
//! The ladder here reconciles two concerns: the target date relative to the
//! flagged current season, and "most recently completed" relative to today
//! when no flag exists. Exactly one year comes out for every input.

use crate::data_fetcher::models::Competition;
use crate::date_resolver::CanonicalDate;
use tracing::debug;

/// Resolves the season year of `competition` applicable on `date`.
///
/// Pure given its inputs apart from reading the current calendar date; use
/// [`resolve_for_date_with_today`] to inject "today" in tests.
pub fn resolve_for_date(competition: &Competition, date: CanonicalDate) -> i32 {
    resolve_for_date_with_today(competition, date, CanonicalDate::today())
}

/// Season resolution ladder:
/// 1. A `current`-flagged season decides: inside its interval its own year,
///    before the start the prior year, after the end the next year. An
///    unparsable interval on a flagged season yields its year unadjusted.
/// 2. Without a flag, the season that ended most recently relative to today.
/// 3. Failing that, the maximum year on record.
/// 4. With no season data at all, the current calendar year.
pub fn resolve_for_date_with_today(
    competition: &Competition,
    date: CanonicalDate,
    today: CanonicalDate,
) -> i32 {
    let seasons = &competition.seasons;

    if seasons.is_empty() {
        debug!(
            "No seasons for competition {}, defaulting to current year",
            competition.id()
        );
        return today.year();
    }

    if let Some(current) = seasons.iter().find(|s| s.current) {
        return match (current.start_date(), current.end_date()) {
            (Some(start), Some(end)) => {
                if date.date() < start {
                    current.year - 1
                } else if date.date() > end {
                    current.year + 1
                } else {
                    current.year
                }
            }
            // Interval absent or malformed: trust the flag
            _ => current.year,
        };
    }

    // No current flag: the provider hasn't rolled over yet. Use the season
    // that ended most recently relative to today, ties broken by year.
    let latest_ended = seasons
        .iter()
        .filter_map(|s| s.end_date().map(|end| (s, end)))
        .filter(|(_, end)| *end < today.date())
        .max_by_key(|(s, end)| (*end, s.year))
        .map(|(s, _)| s);

    if let Some(season) = latest_ended {
        debug!(
            "Using most recently completed season {} for competition {}",
            season.year,
            competition.id()
        );
        return season.year;
    }

    // Nothing ended yet either: fall back to the highest year on record
    seasons
        .iter()
        .map(|s| s.year)
        .max()
        .unwrap_or_else(|| today.year())
}

/// Convenience check used by the aggregator's cost-control filter.
pub fn season_is_supported(season: i32, supported: Option<&[i32]>) -> bool {
    match supported {
        Some(window) => window.contains(&season),
        None => true,
    }
}
