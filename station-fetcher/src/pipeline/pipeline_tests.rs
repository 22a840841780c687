//! End-to-end runs against a local mock Overpass interpreter.

use super::*;
use crate::domain::{ImportanceLevel, StationType};
use crate::output::read_snapshot;
use crate::overpass::OverpassConfig;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use tempfile::{TempDir, tempdir};

async fn mock_interpreter(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/api/interpreter", post(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/interpreter")
}

async fn config_for(status: StatusCode, body: &'static str) -> (RunConfig, TempDir) {
    let url = mock_interpreter(status, body).await;
    let dir = tempdir().unwrap();
    let config = RunConfig::new(
        OverpassConfig::new().with_base_url(url).with_timeout(5),
        dir.path().join("stations.json"),
    );
    (config, dir)
}

#[tokio::test]
async fn beijing_station_saved() {
    let (config, _dir) = config_for(
        StatusCode::OK,
        r#"{"elements": [{"type": "node", "id": 1, "lat": 39.9, "lon": 116.4, "tags": {"name": "北京站"}}]}"#,
    )
    .await;

    let outcome = run(&config).await;
    assert_eq!(
        outcome,
        RunOutcome::Saved {
            count: 1,
            path: config.output_path.clone()
        }
    );
    assert!(outcome.is_success());

    let doc = read_snapshot(&config.output_path).unwrap();
    assert_eq!(doc.metadata.total_stations, 1);
    let station = &doc.stations[0];
    assert_eq!(station.id, 1);
    assert_eq!(station.name.chinese, "北京站");
    assert_eq!(station.name.english, "Bei Jing Zhan");
    assert_eq!(station.location.latitude, 39.9);
    assert_eq!(station.location.longitude, 116.4);
    assert_eq!(station.station_info.level, ImportanceLevel::Station);
    assert_eq!(station.station_info.station_type, StationType::Unknown);
}

#[tokio::test]
async fn empty_response_writes_nothing() {
    let (config, _dir) = config_for(StatusCode::OK, r#"{"elements": []}"#).await;

    assert_eq!(run(&config).await, RunOutcome::NoData);
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn first_of_colocated_stations_wins() {
    let (config, _dir) = config_for(
        StatusCode::OK,
        r#"{"elements": [
            {"id": 10, "lat": 39.9000001, "lon": 116.4, "tags": {"name": "北京站", "railway": "station"}},
            {"id": 11, "lat": 39.9, "lon": 116.4000002, "tags": {"name": "北京地铁站", "railway": "subway_entrance"}},
            {"id": 12, "lat": 31.25, "lon": 121.45, "tags": {"name": "上海站"}}
        ]}"#,
    )
    .await;

    run(&config).await;

    let doc = read_snapshot(&config.output_path).unwrap();
    let ids: Vec<i64> = doc.stations.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 12]);
    assert_eq!(doc.stations[0].name.chinese, "北京站");
    assert_eq!(doc.metadata.total_stations, 2);
}

#[tokio::test]
async fn api_error_writes_nothing() {
    let (config, _dir) = config_for(StatusCode::TOO_MANY_REQUESTS, "rate limited").await;

    assert_eq!(run(&config).await, RunOutcome::NoData);
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn malformed_body_writes_nothing() {
    let (config, _dir) = config_for(StatusCode::OK, "<html>Overpass error</html>").await;

    assert_eq!(run(&config).await, RunOutcome::NoData);
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn only_nameless_stations_writes_nothing() {
    let (config, _dir) = config_for(
        StatusCode::OK,
        r#"{"elements": [
            {"id": 1, "lat": 39.9, "lon": 116.4, "tags": {"railway": "station"}},
            {"id": 2, "lat": 31.2, "lon": 121.4}
        ]}"#,
    )
    .await;

    assert_eq!(run(&config).await, RunOutcome::NoValidStations);
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn malformed_element_skipped() {
    let (config, _dir) = config_for(
        StatusCode::OK,
        r#"{"elements": [
            {"id": 1, "tags": {"name": "无坐标站"}},
            {"id": 2, "lat": 23.15, "lon": 113.26, "tags": {"name": "广州站"}}
        ]}"#,
    )
    .await;

    let outcome = run(&config).await;
    assert!(matches!(outcome, RunOutcome::Saved { count: 1, .. }));
    let doc = read_snapshot(&config.output_path).unwrap();
    assert_eq!(doc.stations[0].id, 2);
}

#[tokio::test]
async fn unwritable_output_reports_failure() {
    let url = mock_interpreter(
        StatusCode::OK,
        r#"{"elements": [{"id": 1, "lat": 39.9, "lon": 116.4, "tags": {"name": "北京站"}}]}"#,
    )
    .await;
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("stations.json");
    let config = RunConfig::new(OverpassConfig::new().with_base_url(url), path.clone());

    let outcome = run(&config).await;
    assert_eq!(outcome, RunOutcome::WriteFailed { path });
    assert!(!outcome.is_success());
}

#[test]
fn process_stage_drops_nameless_and_duplicates() {
    let elements = vec![
        serde_json::json!({"id": 1, "lat": 39.9, "lon": 116.4, "tags": {}}),
        serde_json::json!({"id": 2, "lat": 39.9, "lon": 116.4, "tags": {"name": "北京站"}}),
        serde_json::json!({"id": 3, "lat": 39.9, "lon": 116.4, "tags": {"name": "北京西站"}}),
    ];

    let stations = process_stage(&elements);
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].id, 2);
}
