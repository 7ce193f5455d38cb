//! Pure projections from a view-state snapshot to render-ready data. None
//! of these mutate state; the renderer is the only consumer.

use crate::core::format;
use crate::core::model::{Event, EventCategory, PricePoint, SummaryStatistics};

/// Most recent points kept for the chart; longer series are truncated.
pub const CHART_POINT_CAP: usize = 1000;

/// Visual padding beyond the observed min/max of the charted points.
pub const PRICE_DOMAIN_PADDING: f64 = 10.0;

/// Entries shown in the event feed. A display cap, not a ranking.
pub const EVENT_FEED_LIMIT: usize = 10;

const DEFAULT_CATEGORY_COLOR: &str = "#6c757d";

/// Render-ready price series: a bounded slice of the input, still in
/// chronological order, plus the padded y-domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries<'a> {
    pub points: &'a [PricePoint],
    pub domain: Option<(f64, f64)>,
}

pub fn chart_series(prices: &[PricePoint]) -> ChartSeries<'_> {
    let start = prices.len().saturating_sub(CHART_POINT_CAP);
    let points = &prices[start..];
    ChartSeries {
        points,
        domain: price_domain(points),
    }
}

fn price_domain(points: &[PricePoint]) -> Option<(f64, f64)> {
    let first = points.first()?.price;
    let (min, max) = points
        .iter()
        .skip(1)
        .fold((first, first), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });
    Some((min - PRICE_DOMAIN_PADDING, max + PRICE_DOMAIN_PADDING))
}

/// First `EVENT_FEED_LIMIT` events in source order.
pub fn event_feed(events: &[Event]) -> &[Event] {
    event_feed_limited(events, EVENT_FEED_LIMIT)
}

pub fn event_feed_limited(events: &[Event], limit: usize) -> &[Event] {
    &events[..events.len().min(limit)]
}

/// Summary statistics formatted for the header cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub observations: String,
    pub average_price: String,
    pub min_price: String,
    pub max_price: String,
    pub range_start: String,
    pub range_end: String,
}

pub fn summary_cards(summary: &SummaryStatistics) -> SummaryCards {
    SummaryCards {
        observations: format::count(summary.total_observations),
        average_price: format::price(summary.price_statistics.mean),
        min_price: format::price(summary.price_statistics.min),
        max_price: format::price(summary.price_statistics.max),
        range_start: format::date(summary.date_range.start),
        range_end: format::date(summary.date_range.end),
    }
}

/// Badge color token for an event category. Total over the enumeration;
/// anything outside the known set gets the neutral token.
pub fn category_color(category: &EventCategory) -> &'static str {
    match category {
        EventCategory::Conflict => "#dc3545",
        EventCategory::Political => "#007bff",
        EventCategory::Economic => "#28a745",
        EventCategory::Opec => "#ffc107",
        EventCategory::NaturalDisaster => "#6f42c1",
        EventCategory::Other(_) => DEFAULT_CATEGORY_COLOR,
    }
}
