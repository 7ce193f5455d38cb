//! In-memory data source backed by a bundled slice of the Brent history.
//! Serves the same contract as the HTTP backend, including the near-date
//! window filtering, so the dashboard runs offline via `brentwatch demo`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::model::{
    DateRange, Event, EventCategory, NearbyEvent, PricePoint, PriceStatistics, SummaryStatistics,
};
use crate::core::source::{DashboardDataSource, FetchResult};

pub struct SampleDataSource {
    prices: Vec<PricePoint>,
    events: Vec<Event>,
    summary: SummaryStatistics,
}

impl SampleDataSource {
    pub fn new() -> Self {
        Self::with_data(sample_prices(), sample_events())
    }

    /// Builds a source over caller-provided data; used by tests that need a
    /// deterministic dataset.
    pub fn with_data(prices: Vec<PricePoint>, events: Vec<Event>) -> Self {
        let summary = summarize(&prices);
        SampleDataSource {
            prices,
            events,
            summary,
        }
    }
}

impl Default for SampleDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardDataSource for SampleDataSource {
    async fn fetch_prices(&self) -> FetchResult<Vec<PricePoint>> {
        Ok(self.prices.clone())
    }

    async fn fetch_events(&self) -> FetchResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    async fn fetch_summary(&self) -> FetchResult<SummaryStatistics> {
        Ok(self.summary.clone())
    }

    async fn fetch_nearby_events(
        &self,
        date: NaiveDate,
        window_days: u32,
    ) -> FetchResult<Vec<NearbyEvent>> {
        let window = i64::from(window_days);
        Ok(self
            .events
            .iter()
            .filter(|e| (e.date - date).num_days().abs() <= window)
            .map(|e| NearbyEvent {
                event: e.clone(),
                days_from_target: (e.date - date).num_days(),
            })
            .collect())
    }
}

fn summarize(prices: &[PricePoint]) -> SummaryStatistics {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid literal date");
    let Some(first) = prices.first() else {
        return SummaryStatistics {
            total_observations: 0,
            price_statistics: PriceStatistics {
                mean: 0.0,
                std: None,
                min: 0.0,
                max: 0.0,
            },
            date_range: DateRange {
                start: epoch,
                end: epoch,
            },
        };
    };

    let n = prices.len() as f64;
    let mean = prices.iter().map(|p| p.price).sum::<f64>() / n;
    let variance = prices
        .iter()
        .map(|p| (p.price - mean).powi(2))
        .sum::<f64>()
        / n;
    let (min, max) = prices
        .iter()
        .fold((first.price, first.price), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });

    SummaryStatistics {
        total_observations: prices.len() as u64,
        price_statistics: PriceStatistics {
            mean,
            std: Some(variance.sqrt()),
            min,
            max,
        },
        date_range: DateRange {
            start: prices.first().map_or(epoch, |p| p.date),
            end: prices.last().map_or(epoch, |p| p.date),
        },
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid literal date")
}

fn p(y: i32, m: u32, day: u32, price: f64) -> PricePoint {
    PricePoint {
        date: d(y, m, day),
        price,
    }
}

// Hand-picked observations spanning the 1987-2022 series, enough to show
// the big swings without shipping the full daily file.
fn sample_prices() -> Vec<PricePoint> {
    vec![
        p(1987, 5, 20, 18.63),
        p(1988, 10, 3, 12.15),
        p(1990, 7, 16, 17.42),
        p(1990, 10, 9, 40.75),
        p(1991, 2, 28, 18.90),
        p(1994, 3, 15, 13.65),
        p(1997, 1, 8, 24.53),
        p(1998, 12, 10, 9.10),
        p(2000, 9, 7, 34.38),
        p(2001, 9, 24, 21.77),
        p(2003, 3, 12, 33.26),
        p(2005, 8, 30, 67.57),
        p(2007, 1, 18, 52.02),
        p(2008, 7, 3, 143.95),
        p(2008, 12, 24, 33.73),
        p(2010, 4, 6, 85.84),
        p(2011, 4, 8, 126.65),
        p(2012, 3, 13, 125.98),
        p(2014, 6, 19, 115.06),
        p(2015, 1, 13, 45.13),
        p(2016, 1, 20, 27.88),
        p(2017, 5, 25, 51.46),
        p(2018, 10, 3, 86.29),
        p(2020, 1, 6, 68.91),
        p(2020, 4, 21, 19.33),
        p(2020, 11, 24, 47.86),
        p(2021, 10, 26, 86.40),
        p(2022, 3, 8, 127.98),
        p(2022, 11, 14, 93.14),
    ]
}

fn sample_events() -> Vec<Event> {
    fn event(
        date: NaiveDate,
        name: &str,
        category: EventCategory,
        impact: u8,
        region: &str,
        description: &str,
    ) -> Event {
        Event {
            date,
            event: name.to_string(),
            description: description.to_string(),
            category,
            impact_score: impact,
            region: Some(region.to_string()),
        }
    }

    vec![
        event(
            d(1990, 8, 2),
            "Iraq invades Kuwait",
            EventCategory::Conflict,
            9,
            "Middle East",
            "Invasion removes Kuwaiti supply and triggers the Gulf crisis price spike",
        ),
        event(
            d(1991, 1, 17),
            "Gulf War air campaign begins",
            EventCategory::Conflict,
            8,
            "Middle East",
            "Coalition strikes begin; prices collapse once supply fears ease",
        ),
        event(
            d(1997, 7, 2),
            "Asian financial crisis",
            EventCategory::Economic,
            7,
            "Asia",
            "Regional demand slump drags prices toward the 1998 lows",
        ),
        event(
            d(2001, 9, 11),
            "September 11 attacks",
            EventCategory::Conflict,
            9,
            "North America",
            "Demand shock as air travel halts and recession fears build",
        ),
        event(
            d(2003, 3, 20),
            "Iraq War begins",
            EventCategory::Conflict,
            8,
            "Middle East",
            "Invasion of Iraq disrupts exports and adds a war premium",
        ),
        event(
            d(2005, 8, 29),
            "Hurricane Katrina",
            EventCategory::NaturalDisaster,
            8,
            "North America",
            "Gulf of Mexico production and refining knocked offline",
        ),
        event(
            d(2008, 9, 15),
            "Lehman Brothers collapse",
            EventCategory::Economic,
            9,
            "Global",
            "Financial crisis erases demand; prices fall from record highs",
        ),
        event(
            d(2010, 12, 17),
            "Arab Spring begins",
            EventCategory::Political,
            7,
            "Middle East",
            "Unrest spreads across producing countries through 2011",
        ),
        event(
            d(2011, 3, 11),
            "Tohoku earthquake and tsunami",
            EventCategory::NaturalDisaster,
            6,
            "Asia",
            "Japanese refining capacity drops; energy trade flows shift",
        ),
        event(
            d(2014, 11, 27),
            "OPEC declines to cut output",
            EventCategory::Opec,
            8,
            "Global",
            "Market-share strategy amid the shale glut accelerates the slide",
        ),
        event(
            d(2016, 11, 30),
            "OPEC agrees first cut since 2008",
            EventCategory::Opec,
            7,
            "Global",
            "Vienna agreement trims supply to rebalance the market",
        ),
        event(
            d(2020, 3, 6),
            "OPEC+ talks collapse",
            EventCategory::Opec,
            9,
            "Global",
            "Saudi-Russia price war starts as the pandemic hits demand",
        ),
        event(
            d(2020, 3, 23),
            "COVID-19 lockdowns spread",
            EventCategory::Economic,
            9,
            "Global",
            "Global mobility restrictions crater oil consumption",
        ),
        event(
            d(2020, 4, 12),
            "OPEC+ record production cut",
            EventCategory::Opec,
            8,
            "Global",
            "9.7 million bpd cut agreed to stem the pandemic collapse",
        ),
        event(
            d(2022, 2, 24),
            "Russia invades Ukraine",
            EventCategory::Conflict,
            9,
            "Europe",
            "Sanctions risk on Russian supply sends Brent above $120",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nearby_window_is_inclusive_and_annotated() {
        let source = SampleDataSource::new();
        let target = d(2020, 3, 23);

        let nearby = source.fetch_nearby_events(target, 30).await.unwrap();

        // 2020-03-06 (-17), 2020-03-23 (0), 2020-04-12 (+20); nothing else
        // in the dataset falls within 30 days.
        assert_eq!(nearby.len(), 3);
        for e in &nearby {
            assert!(e.days_from_target.abs() <= 30);
            assert_eq!(e.days_from_target, (e.event.date - target).num_days());
        }
        let offsets: Vec<i64> = nearby.iter().map(|e| e.days_from_target).collect();
        assert_eq!(offsets, vec![-17, 0, 20]);
    }

    #[tokio::test]
    async fn test_nearby_excludes_events_outside_window() {
        let events = vec![
            Event {
                date: d(2020, 3, 10),
                event: "Inside window".to_string(),
                description: String::new(),
                category: EventCategory::Conflict,
                impact_score: 8,
                region: None,
            },
            Event {
                date: d(2020, 5, 1),
                event: "Outside window".to_string(),
                description: String::new(),
                category: EventCategory::Economic,
                impact_score: 5,
                region: None,
            },
        ];
        let source = SampleDataSource::with_data(sample_prices(), events);

        let nearby = source
            .fetch_nearby_events(d(2020, 3, 23), 30)
            .await
            .unwrap();

        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].event.event, "Inside window");
        assert_eq!(nearby[0].days_from_target, -13);
    }

    #[tokio::test]
    async fn test_summary_reflects_price_series() {
        let prices = vec![p(2020, 1, 1, 10.0), p(2020, 1, 2, 20.0), p(2020, 1, 3, 30.0)];
        let source = SampleDataSource::with_data(prices, Vec::new());

        let summary = source.fetch_summary().await.unwrap();

        assert_eq!(summary.total_observations, 3);
        assert_eq!(summary.price_statistics.mean, 20.0);
        assert_eq!(summary.price_statistics.min, 10.0);
        assert_eq!(summary.price_statistics.max, 30.0);
        assert_eq!(summary.date_range.start, d(2020, 1, 1));
        assert_eq!(summary.date_range.end, d(2020, 1, 3));
    }

    #[test]
    fn test_bundled_dataset_is_chronological() {
        let prices = sample_prices();
        assert!(prices.windows(2).all(|w| w[0].date < w[1].date));
    }
}
