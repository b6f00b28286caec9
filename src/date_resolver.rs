//! Canonical calendar dates and their mirror into shareable state.
//!
//! The whole engine reasons about plain `YYYY-MM-DD` values: no time of day,
//! no timezone drift. "Today" always means the local civil date, not the UTC
//! day.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use std::fmt;
use tracing::info;

/// An unambiguous calendar date, always rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today in the consumer's local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Strict `YYYY-MM-DD` parse; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .map(Self)
    }

    /// Resolves an external date representation. Absent or unparsable input
    /// falls back to today; this never fails.
    pub fn resolve(raw: Option<&str>) -> Self {
        Self::resolve_with_today(raw, Self::today())
    }

    /// Internal variant with an injected "today" for deterministic tests.
    pub fn resolve_with_today(raw: Option<&str>, today: Self) -> Self {
        match raw {
            Some(value) => match Self::parse(value) {
                Some(date) => date,
                None => {
                    info!("Unparsable date input {value:?}, falling back to today");
                    today
                }
            },
            None => today,
        }
    }

    /// Moves the date by `delta_days` (negative for past days). Saturates at
    /// the calendar boundary instead of failing.
    pub fn advance(self, delta_days: i64) -> Self {
        self.0
            .checked_add_signed(TimeDelta::days(delta_days))
            .map(Self)
            .unwrap_or(self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Idempotent mirror of the canonical date into shareable external state
/// (a URL query parameter in the host application).
///
/// `sync` returns the value to write only when it differs from what was last
/// written, so resolving the same date twice never re-triggers a state write.
#[derive(Debug, Default)]
pub struct DateState {
    last_written: Option<CanonicalDate>,
}

impl DateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `date` as the shared value. Returns `Some(YYYY-MM-DD)` when a
    /// write is needed, `None` when the state is already in sync.
    pub fn sync(&mut self, date: CanonicalDate) -> Option<String> {
        if self.last_written == Some(date) {
            return None;
        }
        self.last_written = Some(date);
        Some(date.to_string())
    }

    pub fn current(&self) -> Option<CanonicalDate> {
        self.last_written
    }
}
