//! Read-side contract over the analysis backend's resources.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::core::model::{Event, NearbyEvent, PricePoint, SummaryStatistics};

/// Failure modes of a single fetch. The controller collapses these into one
/// user-facing message; the variants exist for the operational log.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("server returned {0}")]
    Server(reqwest::StatusCode),

    /// The response arrived but was not in the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// The four read operations the dashboard consumes. Each call is idempotent
/// and fail-fast; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    async fn fetch_prices(&self) -> FetchResult<Vec<PricePoint>>;

    async fn fetch_events(&self) -> FetchResult<Vec<Event>>;

    async fn fetch_summary(&self) -> FetchResult<SummaryStatistics>;

    /// Events within `window_days` of `date` (inclusive on both sides),
    /// already annotated with `days_from_target`, in any order.
    async fn fetch_nearby_events(
        &self,
        date: NaiveDate,
        window_days: u32,
    ) -> FetchResult<Vec<NearbyEvent>>;
}
