//! HTTP implementation of the dashboard data source against the analysis
//! backend. Decoding happens here so the rest of the crate never sees raw
//! JSON.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::core::model::{Event, NearbyEvent, PricePoint, SummaryStatistics};
use crate::core::source::{DashboardDataSource, FetchError, FetchResult};

pub struct ApiDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl ApiDataSource {
    pub fn new(base_url: &str) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent("brentwatch/0.1")
            .build()
            .map_err(FetchError::Network)?;
        Ok(ApiDataSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Requesting dashboard data");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server(status));
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        Ok(serde_json::from_str(&body)?)
    }
}

// The backend wraps list resources in a `data` envelope with bookkeeping
// fields (count, categories, ...) we deliberately ignore.
#[derive(Deserialize, Debug)]
struct PriceSeriesResponse {
    data: Vec<PricePoint>,
}

#[derive(Deserialize, Debug)]
struct EventListResponse {
    data: Vec<Event>,
}

#[derive(Deserialize, Debug)]
struct NearbyEventsResponse {
    data: Vec<NearbyEvent>,
}

#[async_trait]
impl DashboardDataSource for ApiDataSource {
    #[instrument(name = "FetchPrices", skip(self))]
    async fn fetch_prices(&self) -> FetchResult<Vec<PricePoint>> {
        let response: PriceSeriesResponse = self.get_json("/api/data/brent-prices", &[]).await?;
        Ok(response.data)
    }

    #[instrument(name = "FetchEvents", skip(self))]
    async fn fetch_events(&self) -> FetchResult<Vec<Event>> {
        let response: EventListResponse = self.get_json("/api/data/events", &[]).await?;
        Ok(response.data)
    }

    #[instrument(name = "FetchSummary", skip(self))]
    async fn fetch_summary(&self) -> FetchResult<SummaryStatistics> {
        // Summary is served as a top-level object, not in a `data` envelope.
        self.get_json("/api/analysis/summary", &[]).await
    }

    #[instrument(name = "FetchNearbyEvents", skip(self), fields(date = %date))]
    async fn fetch_nearby_events(
        &self,
        date: NaiveDate,
        window_days: u32,
    ) -> FetchResult<Vec<NearbyEvent>> {
        let query = [
            ("date", date.format("%Y-%m-%d").to_string()),
            ("days", window_days.to_string()),
        ];
        let response: NearbyEventsResponse = self.get_json("/api/events/near-date", &query).await?;
        Ok(response.data)
    }
}
