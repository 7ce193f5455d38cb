//! Sequences the dashboard loads and owns every write to the view state.
//!
//! Two independent tracks: the batch load of prices/events/summary, and the
//! nearby-event query tied to the selected date. The nearby track follows
//! last-request-wins: a response commits only if no newer request was issued
//! while it was in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use futures::future::join3;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::core::source::DashboardDataSource;
use crate::core::state::{LoadStatus, ViewState};

/// Shown whenever the batch load fails, whichever resource was at fault.
const LOAD_FAILED_MESSAGE: &str =
    "Failed to load dashboard data. Please check if the backend is running.";

pub struct DashboardController {
    source: Arc<dyn DashboardDataSource>,
    state: Mutex<ViewState>,
    window_days: u32,
    nearby_seq: AtomicU64,
}

impl DashboardController {
    pub fn new(
        source: Arc<dyn DashboardDataSource>,
        initial_date: NaiveDate,
        window_days: u32,
    ) -> Self {
        DashboardController {
            source,
            state: Mutex::new(ViewState::new(initial_date)),
            window_days,
            nearby_seq: AtomicU64::new(0),
        }
    }

    /// Clones the current view state for readers.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Runs the batch load. All three resources must succeed before the
    /// state becomes `Ready`; any single failure discards the whole batch
    /// and records one catch-all message.
    pub async fn load_dashboard(&self) {
        {
            let mut state = self.state.lock().await;
            state.status = LoadStatus::Loading;
            state.error = None;
        }

        let (prices, events, summary) = join3(
            self.source.fetch_prices(),
            self.source.fetch_events(),
            self.source.fetch_summary(),
        )
        .await;

        let mut state = self.state.lock().await;
        match (prices, events, summary) {
            (Ok(prices), Ok(events), Ok(summary)) => {
                debug!(
                    prices = prices.len(),
                    events = events.len(),
                    "Dashboard data loaded"
                );
                state.prices = prices;
                state.events = events;
                state.summary = Some(summary);
                state.status = LoadStatus::Ready;
            }
            (prices, events, summary) => {
                for err in [prices.err(), events.err(), summary.err()]
                    .into_iter()
                    .flatten()
                {
                    error!(error = %err, "Dashboard load failed");
                }
                state.prices.clear();
                state.events.clear();
                state.summary = None;
                state.status = LoadStatus::Error;
                state.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Selects a new inspection date and refreshes the nearby-event slice.
    /// Only the most recently issued request may commit its result; anything
    /// superseded while in flight is dropped.
    pub async fn select_date(&self, date: NaiveDate) {
        let seq = self.nearby_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().await;
            state.selected_date = date;
            state.nearby_status = LoadStatus::Loading;
        }

        let result = self.source.fetch_nearby_events(date, self.window_days).await;

        let mut state = self.state.lock().await;
        if self.nearby_seq.load(Ordering::SeqCst) != seq {
            debug!(%date, "Discarding stale nearby-events response");
            return;
        }

        match result {
            Ok(nearby) => {
                debug!(%date, count = nearby.len(), "Nearby events loaded");
                state.nearby_events = nearby;
                state.nearby_status = LoadStatus::Ready;
            }
            Err(err) => {
                // Whatever was displayed before stays visible; this query
                // never blocks the rest of the dashboard.
                warn!(error = %err, %date, "Nearby-events fetch failed");
                state.nearby_status = LoadStatus::Error;
            }
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }
}
