use std::fs;
use tracing::info;

use brentwatch::AppCommand;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const PRICES_BODY: &str = r#"{
        "data": [
            {"date": "2020-03-10", "price": 37.22},
            {"date": "2020-03-20", "price": 26.98},
            {"date": "2020-03-23", "price": 27.03}
        ],
        "count": 3,
        "date_range": {"start": "2020-03-10", "end": "2020-03-23"}
    }"#;

    pub const EVENTS_BODY: &str = r#"{
        "data": [
            {
                "date": "2020-03-06",
                "event": "OPEC+ talks collapse",
                "category": "OPEC",
                "description": "Saudi-Russia price war starts as the pandemic hits demand",
                "impact_score": 9,
                "region": "Global"
            },
            {
                "date": "2020-05-01",
                "event": "US shale shut-ins peak",
                "category": "Economic",
                "description": "Producers curtail output after the price collapse",
                "impact_score": 6,
                "region": "North America"
            }
        ],
        "count": 2,
        "categories": ["OPEC", "Economic"],
        "regions": ["Global", "North America"]
    }"#;

    pub const SUMMARY_BODY: &str = r#"{
        "total_observations": 9011,
        "date_range": {"start": "1987-05-20", "end": "2022-11-14"},
        "price_statistics": {"mean": 48.42, "std": 32.86, "min": 9.1, "max": 143.95}
    }"#;

    pub const NEARBY_BODY: &str = r#"{
        "data": [
            {
                "date": "2020-03-06",
                "event": "OPEC+ talks collapse",
                "category": "OPEC",
                "description": "Saudi-Russia price war starts as the pandemic hits demand",
                "impact_score": 9,
                "region": "Global",
                "days_from_target": -17
            }
        ],
        "count": 1,
        "target_date": "2020-03-23",
        "search_range_days": 30
    }"#;

    /// Mounts all four backend endpoints with healthy responses.
    pub async fn mount_dashboard_endpoints(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/data/brent-prices"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PRICES_BODY))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/data/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EVENTS_BODY))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/analysis/summary"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SUMMARY_BODY))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/events/near-date"))
            .and(query_param("days", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_string(NEARBY_BODY))
            .mount(server)
            .await;
    }

    pub fn config_for(base_url: &str) -> String {
        format!(
            r#"
api:
  base_url: {base_url}
dashboard:
  selected_date: 2020-03-23
  window_days: 30
"#
        )
    }
}

#[test_log::test(tokio::test)]
async fn test_full_dashboard_flow_with_mock() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_dashboard_endpoints(&mock_server).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    fs::write(config_path, test_utils::config_for(&mock_server.uri()))
        .expect("Failed to write config file");

    let result = brentwatch::run_command(
        AppCommand::Show { date: None },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Dashboard flow failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_controller_reaches_ready_against_http_backend() {
    use brentwatch::core::controller::DashboardController;
    use brentwatch::core::state::LoadStatus;
    use brentwatch::providers::api::ApiDataSource;
    use chrono::NaiveDate;
    use std::sync::Arc;

    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_dashboard_endpoints(&mock_server).await;

    let source = Arc::new(ApiDataSource::new(&mock_server.uri()).expect("client"));
    let selected = NaiveDate::from_ymd_opt(2020, 3, 23).unwrap();
    let controller = DashboardController::new(source, selected, 30);

    controller.load_dashboard().await;
    controller.select_date(selected).await;

    let state = controller.snapshot().await;
    info!(status = ?state.status, "Controller settled");

    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.prices.len(), 3);
    assert_eq!(state.events.len(), 2);
    assert_eq!(
        state.summary.as_ref().map(|s| s.total_observations),
        Some(9011)
    );
    assert_eq!(state.nearby_status, LoadStatus::Ready);
    assert_eq!(state.nearby_events.len(), 1);
    assert_eq!(state.nearby_events[0].days_from_target, -17);
}

#[test_log::test(tokio::test)]
async fn test_backend_failure_surfaces_catch_all_message() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    let mock_server = wiremock::MockServer::start().await;
    // Prices and events answer, summary does not.
    Mock::given(method("GET"))
        .and(path("/api/data/brent-prices"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::PRICES_BODY))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/data/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::EVENTS_BODY))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analysis/summary"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events/near-date"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::NEARBY_BODY))
        .mount(&mock_server)
        .await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    fs::write(config_path, test_utils::config_for(&mock_server.uri()))
        .expect("Failed to write config file");

    let result = brentwatch::run_command(
        AppCommand::Show { date: None },
        Some(config_path.to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("a failing resource must fail the run");
    assert!(
        err.to_string().contains("Failed to load dashboard data"),
        "unexpected error: {err}"
    );
}

#[test_log::test(tokio::test)]
async fn test_demo_flow_runs_offline() {
    // The sample source never touches the network; the config's base_url is
    // irrelevant but a concrete file keeps the test hermetic.
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    fs::write(config_path, test_utils::config_for("http://localhost:1"))
        .expect("Failed to write config file");

    let result = brentwatch::run_command(
        AppCommand::Demo { date: None },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Demo flow failed with: {:?}", result.err());
}
