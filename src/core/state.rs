//! The single authoritative in-memory view state. All writes go through the
//! controller; readers work on cloned snapshots.

use chrono::NaiveDate;

use crate::core::model::{Event, NearbyEvent, PricePoint, SummaryStatistics};

/// Load status of either track. The primary and nearby tracks advance
/// independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub status: LoadStatus,
    /// Catch-all message for a failed batch load. `None` unless `status`
    /// is `Error`.
    pub error: Option<String>,
    pub prices: Vec<PricePoint>,
    pub events: Vec<Event>,
    pub summary: Option<SummaryStatistics>,
    pub selected_date: NaiveDate,
    /// Result of the most recently completed nearby query whose date still
    /// matched `selected_date` at commit time.
    pub nearby_events: Vec<NearbyEvent>,
    pub nearby_status: LoadStatus,
}

impl ViewState {
    pub fn new(selected_date: NaiveDate) -> Self {
        ViewState {
            status: LoadStatus::Idle,
            error: None,
            prices: Vec::new(),
            events: Vec::new(),
            summary: None,
            selected_date,
            nearby_events: Vec::new(),
            nearby_status: LoadStatus::Idle,
        }
    }
}
