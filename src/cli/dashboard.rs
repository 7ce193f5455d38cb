//! Terminal renderer for a view-state snapshot. Reads projections only;
//! never touches the controller or the data sources.

use comfy_table::Cell;

use crate::cli::ui;
use crate::core::format;
use crate::core::model::{Event, PricePoint};
use crate::core::projection;
use crate::core::state::{LoadStatus, ViewState};

const SPARKLINE_WIDTH: usize = 72;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render(state: &ViewState, window_days: u32) -> String {
    match state.status {
        LoadStatus::Error => {
            return render_error(state.error.as_deref().unwrap_or("Unknown error"));
        }
        LoadStatus::Idle | LoadStatus::Loading => {
            return ui::style_text("Loading Brent oil dashboard...", ui::StyleType::Subtle);
        }
        LoadStatus::Ready => {}
    }

    let mut out = format!(
        "{}\n{}\n",
        ui::style_text("Brent Oil Price Dashboard", ui::StyleType::Title),
        ui::style_text(
            "Major events and their impact on oil prices (1987-2022)",
            ui::StyleType::Subtle
        )
    );

    if let Some(summary) = &state.summary {
        let cards = projection::summary_cards(summary);
        out.push_str(&render_summary_cards(&cards));
    }

    out.push_str(&render_price_section(&state.prices));
    out.push_str(&render_event_feed(&state.events));
    out.push_str(&render_nearby_section(state, window_days));
    out
}

fn render_error(message: &str) -> String {
    format!(
        "{}\n{}\n",
        ui::style_text("Error", ui::StyleType::Error),
        message
    )
}

fn render_summary_cards(cards: &projection::SummaryCards) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Observations"),
        ui::header_cell("Average Price"),
        ui::header_cell("Price Range"),
        ui::header_cell("Date Range"),
    ]);
    table.add_row(vec![
        ui::value_cell(&cards.observations),
        ui::value_cell(&cards.average_price),
        ui::value_cell(&format!("{} - {}", cards.min_price, cards.max_price)),
        ui::value_cell(&format!("{} - {}", cards.range_start, cards.range_end)),
    ]);

    format!("\n{table}\n")
}

fn render_price_section(prices: &[PricePoint]) -> String {
    let series = projection::chart_series(prices);
    let Some((lo, hi)) = series.domain else {
        return format!(
            "\n{}\n",
            ui::style_text("No price data available.", ui::StyleType::Subtle)
        );
    };

    let Some((first, last)) = series.points.first().zip(series.points.last()) else {
        return String::new();
    };
    let mut out = format!(
        "\n{}  {}\n",
        ui::style_text("Prices", ui::StyleType::SectionLabel),
        ui::style_text(
            &format!(
                "{} - {}, showing {} of {} observations, latest {}",
                format::date(first.date),
                format::date(last.date),
                series.points.len(),
                prices.len(),
                format::price(last.price),
            ),
            ui::StyleType::Subtle
        )
    );
    out.push_str(&sparkline(series.points, lo, hi));
    out.push_str(&format!(
        "\n{}\n",
        ui::style_text(
            &format!("domain {} - {}", format::price(lo), format::price(hi)),
            ui::StyleType::Subtle
        )
    ));
    out
}

/// One-line unicode sparkline over the charted points, bucketed down to the
/// terminal width.
fn sparkline(points: &[PricePoint], lo: f64, hi: f64) -> String {
    let span = (hi - lo).max(f64::EPSILON);
    let width = points.len().min(SPARKLINE_WIDTH);
    (0..width)
        .map(|col| {
            // Last point of each bucket, so the final column is the latest price.
            let idx = ((col + 1) * points.len()).div_ceil(width) - 1;
            let norm = (points[idx].price - lo) / span;
            let level = ((norm * SPARK_LEVELS.len() as f64) as usize).min(SPARK_LEVELS.len() - 1);
            SPARK_LEVELS[level]
        })
        .collect()
}

fn render_event_feed(events: &[Event]) -> String {
    let feed = projection::event_feed(events);
    if feed.is_empty() {
        return String::new();
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Event"),
        ui::header_cell("Category"),
        ui::header_cell("Impact"),
        ui::header_cell("Region"),
        ui::header_cell("Description"),
    ]);
    for event in feed {
        table.add_row(event_row(event, None));
    }

    format!(
        "\n{}\n{table}\n",
        ui::style_text("Major Events", ui::StyleType::SectionLabel)
    )
}

fn render_nearby_section(state: &ViewState, window_days: u32) -> String {
    let heading = format!(
        "Events within {} days of {}",
        window_days,
        format::date(state.selected_date)
    );
    let mut out = format!(
        "\n{}\n",
        ui::style_text(&heading, ui::StyleType::SectionLabel)
    );

    if state.nearby_status == LoadStatus::Error && state.nearby_events.is_empty() {
        out.push_str(&format!(
            "{}\n",
            ui::style_text("Nearby events are unavailable.", ui::StyleType::Subtle)
        ));
        return out;
    }

    if state.nearby_events.is_empty() {
        out.push_str(&format!(
            "{}\n",
            ui::style_text(
                &format!(
                    "No events found within {window_days} days of the selected date."
                ),
                ui::StyleType::Subtle
            )
        ));
        return out;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Offset"),
        ui::header_cell("Event"),
        ui::header_cell("Category"),
        ui::header_cell("Impact"),
        ui::header_cell("Region"),
        ui::header_cell("Description"),
    ]);
    for nearby in &state.nearby_events {
        table.add_row(event_row(&nearby.event, Some(nearby.days_from_target)));
    }
    out.push_str(&format!("{table}\n"));
    out
}

fn event_row(event: &Event, offset: Option<i64>) -> Vec<Cell> {
    let mut row = vec![Cell::new(format::date(event.date))];
    if let Some(days) = offset {
        row.push(ui::value_cell(&format::signed_days(days)));
    }
    row.extend([
        Cell::new(&event.event),
        ui::category_cell(
            event.category.label(),
            projection::category_color(&event.category),
        ),
        ui::value_cell(&format!("{}/9", event.impact_score)),
        Cell::new(event.region.as_deref().unwrap_or("-")),
        Cell::new(&event.description),
    ]);
    row
}
