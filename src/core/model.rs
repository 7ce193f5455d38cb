//! Entities served by the analysis backend, decoded at the transport
//! boundary so everything downstream works with typed data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One daily observation of the Brent spot price.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Category labels used by the curated event list. Labels outside the known
/// set are kept verbatim in `Other` rather than rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Conflict,
    Political,
    Economic,
    Opec,
    NaturalDisaster,
    Other(String),
}

impl EventCategory {
    pub fn label(&self) -> &str {
        match self {
            EventCategory::Conflict => "Conflict",
            EventCategory::Political => "Political",
            EventCategory::Economic => "Economic",
            EventCategory::Opec => "OPEC",
            EventCategory::NaturalDisaster => "Natural Disaster",
            EventCategory::Other(label) => label,
        }
    }
}

impl From<String> for EventCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Conflict" => EventCategory::Conflict,
            "Political" => EventCategory::Political,
            "Economic" => EventCategory::Economic,
            "OPEC" => EventCategory::Opec,
            "Natural Disaster" => EventCategory::NaturalDisaster,
            _ => EventCategory::Other(label),
        }
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        category.label().to_string()
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A macro or geopolitical event from the curated list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub date: NaiveDate,
    pub event: String,
    pub description: String,
    pub category: EventCategory,
    /// 0 (negligible) through 9 (severe).
    pub impact_score: u8,
    #[serde(default)]
    pub region: Option<String>,
}

/// An event within the near-date window, annotated with its signed offset
/// from the selected date. Negative means before, positive after.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NearbyEvent {
    #[serde(flatten)]
    pub event: Event,
    pub days_from_target: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PriceStatistics {
    pub mean: f64,
    #[serde(default)]
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Snapshot of summary statistics over the full price series.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryStatistics {
    pub total_observations: u64,
    pub price_statistics: PriceStatistics,
    pub date_range: DateRange,
}
