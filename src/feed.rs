//! Cycle orchestration: generation tokens, the single-writer result slot,
//! and the explicit feed entry the host invokes on state changes.
//!
//! Date changes can outrun in-flight aggregation cycles. Every cycle is
//! tagged with a monotonically increasing generation token when it is issued;
//! a finished cycle is applied only while its token is still the latest, so a
//! slow fetch for an old date can never overwrite the result for a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::aggregator::aggregate;
use crate::config::Config;
use crate::data_fetcher::catalog::fetch_league_catalog;
use crate::data_fetcher::http_client::create_http_client;
use crate::data_fetcher::models::Competition;
use crate::date_resolver::{CanonicalDate, DateState};
use crate::error::AppError;
use crate::grouping::{AggregationResult, group};

/// Generation token of one aggregation cycle. Monotonically increasing;
/// larger means issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Single-writer, multi-reader holder of the most recent valid cycle result.
///
/// Readers always see either nothing or one complete `AggregationResult`;
/// cycles build their result off to the side and swap it in whole.
#[derive(Debug, Default)]
pub struct ResultSlot {
    issued: AtomicU64,
    latest: Mutex<Option<(Generation, Arc<AggregationResult>)>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next generation token. Call once per cycle, at issue time.
    pub fn issue(&self) -> Generation {
        Generation(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Applies a finished cycle's result, unless it has been superseded.
    /// Returns whether the result was applied.
    pub fn publish(&self, generation: Generation, result: AggregationResult) -> bool {
        if generation.0 != self.issued.load(Ordering::SeqCst) {
            return false;
        }

        let Ok(mut latest) = self.latest.lock() else {
            return false;
        };
        // A newer cycle may have landed between the check above and taking
        // the lock; never step backwards.
        if let Some((applied, _)) = &*latest
            && *applied > generation
        {
            return false;
        }

        *latest = Some((generation, Arc::new(result)));
        true
    }

    /// The most recent applied result, if any cycle has completed.
    pub fn latest(&self) -> Option<Arc<AggregationResult>> {
        self.latest
            .lock()
            .ok()
            .and_then(|latest| latest.as_ref().map(|(_, result)| Arc::clone(result)))
    }

    /// Token of the most recently issued cycle (0 when none yet).
    pub fn latest_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

/// Handle to one in-flight aggregation cycle.
///
/// Awaiting it reports whether the cycle's result was applied; dropping or
/// aborting it leaves the result slot untouched (the generation check already
/// guarantees a superseded cycle cannot publish).
#[derive(Debug)]
pub struct CycleHandle {
    pub generation: Generation,
    task: JoinHandle<bool>,
}

impl CycleHandle {
    /// Waits for the cycle to settle. Returns whether its result was applied.
    pub async fn wait(self) -> bool {
        self.task.await.unwrap_or(false)
    }

    /// Cancels the underlying task outright. Optional; superseded cycles are
    /// discarded on publish either way.
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// The fixture feed: catalog snapshot, selected date, optional competition
/// filter, and the result slot presentation reads from.
///
/// This is the explicit orchestration entry the host calls on every state
/// change; there is no implicit re-execution. Selecting an unchanged date is
/// a no-op.
pub struct FixtureFeed {
    client: Client,
    config: Arc<Config>,
    catalog: Vec<Competition>,
    slot: Arc<ResultSlot>,
    date_state: DateState,
    competition_filter: Option<u32>,
}

impl FixtureFeed {
    /// Builds the feed: creates the HTTP client and fetches the catalog once.
    /// A catalog fetch failure yields an empty feed, not an error.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = create_http_client(&config)?;
        let catalog = fetch_league_catalog(&client, &config).await;

        Ok(Self {
            client,
            config: Arc::new(config),
            catalog,
            slot: Arc::new(ResultSlot::new()),
            date_state: DateState::new(),
            competition_filter: None,
        })
    }

    /// Re-fetches the competition catalog (app start already did it once).
    pub async fn refresh_catalog(&mut self) {
        self.catalog = fetch_league_catalog(&self.client, &self.config).await;
    }

    pub fn catalog(&self) -> &[Competition] {
        &self.catalog
    }

    /// Narrows aggregation to a single competition id (shareable filter), or
    /// clears the restriction.
    ///
    /// When the filter actually changes and a date is selected, a fresh cycle
    /// is started for that date so the narrowed (or widened) result replaces
    /// the one on display. Setting the filter it already holds is a no-op.
    pub fn set_competition_filter(&mut self, league_id: Option<u32>) -> Option<CycleHandle> {
        if self.competition_filter == league_id {
            return None;
        }
        self.competition_filter = league_id;
        self.refresh()
    }

    /// Re-runs aggregation for the currently selected date, if any. The entry
    /// point for state changes that leave the date in place, like a filter
    /// change or a catalog refresh.
    pub fn refresh(&self) -> Option<CycleHandle> {
        let date = self.date_state.current()?;
        Some(self.spawn_cycle(date))
    }

    /// Selects a date and starts an aggregation cycle for it.
    ///
    /// Returns `None` when the date is already selected: the shared state is
    /// in sync and no cycle is issued. Otherwise the previous cycle (if any)
    /// is logically superseded by the newly issued generation.
    pub fn select_date(&mut self, date: CanonicalDate) -> Option<CycleHandle> {
        let written = self.date_state.sync(date)?;
        info!("Date selected: {written}");
        Some(self.spawn_cycle(date))
    }

    /// The currently selected date, if one was selected.
    pub fn selected_date(&self) -> Option<CanonicalDate> {
        self.date_state.current()
    }

    /// The most recent applied result.
    pub fn latest(&self) -> Option<Arc<AggregationResult>> {
        self.slot.latest()
    }

    fn spawn_cycle(&self, date: CanonicalDate) -> CycleHandle {
        let generation = self.slot.issue();
        let client = self.client.clone();
        let config = Arc::clone(&self.config);
        let slot = Arc::clone(&self.slot);

        let competitions: Vec<Competition> = match self.competition_filter {
            Some(league_id) => self
                .catalog
                .iter()
                .filter(|c| c.id() == league_id)
                .cloned()
                .collect(),
            None => self.catalog.clone(),
        };

        let task = tokio::spawn(async move {
            let fixtures = aggregate(&client, &config, &competitions, date).await;
            let result = group(date, &fixtures);

            let applied = slot.publish(generation, result);
            if !applied {
                warn!("Discarding superseded aggregation cycle for {date}");
            }
            applied
        });

        CycleHandle { generation, task }
    }
}
