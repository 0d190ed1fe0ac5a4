use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use babylog_backend::config::AppConfig;
use babylog_backend::domain::FixedClock;
use babylog_backend::storage::JsonConnection;
use babylog_backend::{create_router, AppState};

// 2023-11-14T22:13:20Z
const NOW: i64 = 1_700_000_000_000;
const MINUTE: i64 = 60_000;

struct TestApp {
    _temp_dir: TempDir,
    data_dir: std::path::PathBuf,
    clock: Arc<FixedClock>,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let data_dir_string = data_dir.to_string_lossy().to_string();
        let config = AppConfig::from_lookup(|key| match key {
            "BABYLOG_DATA_DIR" => Some(data_dir_string.clone()),
            _ => None,
        });

        let connection = JsonConnection::new(&config.data_dir).expect("Failed to open data dir");
        let clock = Arc::new(FixedClock::new(NOW));
        let state = AppState::new(connection, clock.clone());

        Self {
            _temp_dir: temp_dir,
            data_dir,
            clock,
            router: create_router(state, &config),
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn write_document(&self, name: &str, contents: &str) {
        std::fs::write(self.data_dir.join(name), contents).unwrap();
    }

    fn read_document(&self, name: &str) -> String {
        std::fs::read_to_string(self.data_dir.join(name)).unwrap()
    }
}

#[tokio::test]
async fn test_feeding_lifecycle() {
    let app = TestApp::new();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/feedings",
            Some(json!({"amountMl": 120.0, "endTime": NOW, "durationMinutes": 20, "feedType": "milk"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let feed = &created["feedingLog"];
    let id = feed["id"].as_str().unwrap().to_string();
    assert_eq!(feed["feedType"], "milk");
    assert_eq!(feed["startTime"], NOW - 20 * MINUTE);
    assert_eq!(feed["nextFeedTime"], NOW + 180 * MINUTE);

    let (status, list) = app.send(Method::GET, "/api/feedings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["feedingLogs"].as_array().unwrap().len(), 1);

    let (status, next) = app.send(Method::GET, "/api/feedings/next", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(next["lastFeedTime"], NOW);
    assert_eq!(next["minutesUntilNextFeed"], 180);
    assert_eq!(next["isOverdue"], false);

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/feedings/{}", id),
            Some(json!({"amountMl": 90.0})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["feedingLog"]["amountMl"], 90.0);
    assert_eq!(updated["feedingLog"]["durationMinutes"], 20);

    let (status, fetched) = app.send(Method::GET, &format!("/api/feedings/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["amountMl"], 90.0);

    let (status, _) = app.send(Method::DELETE, &format!("/api/feedings/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.send(Method::DELETE, &format!("/api/feedings/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.send(Method::GET, &format!("/api/feedings/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 404);
}

#[tokio::test]
async fn test_update_unknown_feeding_is_not_found_and_writes_nothing() {
    let app = TestApp::new();
    app.send(Method::POST, "/api/feedings", Some(json!({"endTime": NOW})))
        .await;
    let before = app.read_document("feeding_logs.json");

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/feedings/no-such-feed",
            Some(json!({"amountMl": 10.0})),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("no-such-feed"));
    assert_eq!(app.read_document("feeding_logs.json"), before);
}

#[tokio::test]
async fn test_failed_write_is_internal_error() {
    let app = TestApp::new();
    let blocked = app.data_dir.join("feeding_logs.json");
    std::fs::create_dir_all(&blocked).unwrap();
    std::fs::write(blocked.join("keep"), "x").unwrap();

    let (status, body) = app
        .send(Method::POST, "/api/feedings", Some(json!({"endTime": NOW})))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], 500);
    assert!(!app.data_dir.join("feeding_logs.json.tmp").exists());
}

#[tokio::test]
async fn test_listed_id_of_legacy_record_can_be_deleted() {
    let app = TestApp::new();
    app.write_document("diaper_logs.json", &json!([{"timestamp": NOW, "dirty": true}]).to_string());

    let (_, list) = app.send(Method::GET, "/api/diapers", None).await;
    let id = list["diaperLogs"][0]["id"].as_str().unwrap().to_string();

    let (status, _) = app.send(Method::DELETE, &format!("/api/diapers/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = app.send(Method::GET, "/api/diapers", None).await;
    assert_eq!(list["diaperLogs"], json!([]));
}

#[tokio::test]
async fn test_next_feed_without_feeds() {
    let app = TestApp::new();

    let (status, next) = app.send(Method::GET, "/api/feedings/next", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(next["nextFeedTime"], Value::Null);
    assert_eq!(next["isOverdue"], false);
}

#[tokio::test]
async fn test_next_feed_becomes_overdue() {
    let app = TestApp::new();
    app.send(
        Method::POST,
        "/api/feedings",
        Some(json!({"endTime": NOW - 200 * MINUTE})),
    )
    .await;

    let (_, next) = app.send(Method::GET, "/api/feedings/next", None).await;
    assert_eq!(next["minutesUntilNextFeed"], -20);
    assert_eq!(next["isOverdue"], true);

    app.clock.set(NOW - 30 * MINUTE);
    let (_, next) = app.send(Method::GET, "/api/feedings/next", None).await;
    assert_eq!(next["minutesUntilNextFeed"], 10);
    assert_eq!(next["isOverdue"], false);
}

#[tokio::test]
async fn test_list_limit_and_corrupt_document() {
    let app = TestApp::new();
    app.write_document("feeding_logs.json", "{ definitely not an array");

    let (status, list) = app.send(Method::GET, "/api/feedings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["feedingLogs"], json!([]));

    for minutes_ago in [30, 10, 20] {
        app.send(
            Method::POST,
            "/api/feedings",
            Some(json!({"endTime": NOW - minutes_ago * MINUTE})),
        )
        .await;
    }

    let (_, list) = app.send(Method::GET, "/api/feedings?limit=2", None).await;
    let ends: Vec<i64> = list["feedingLogs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["endTime"].as_i64().unwrap())
        .collect();
    assert_eq!(ends, vec![NOW - 10 * MINUTE, NOW - 20 * MINUTE]);
}

#[tokio::test]
async fn test_settings_drive_next_feed_interval() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/api/settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["defaultFeedIntervalMinutes"], 180);
    assert_eq!(body["settings"]["theme"], "system");

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/settings",
            Some(json!({"defaultFeedIntervalMinutes": 0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/settings",
            Some(json!({"defaultFeedIntervalMinutes": 60, "preferredUnit": "oz"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["preferredUnit"], "oz");
    assert!(app
        .read_document("settings.yaml")
        .contains("default_feed_interval_minutes: 60"));

    let (_, created) = app
        .send(Method::POST, "/api/feedings", Some(json!({"endTime": NOW})))
        .await;
    assert_eq!(created["feedingLog"]["nextFeedTime"], NOW + 60 * MINUTE);
}

#[tokio::test]
async fn test_diaper_lifecycle() {
    let app = TestApp::new();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/diapers",
            Some(json!({"timestamp": NOW, "dirty": false, "stoolColor": "green"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let log = &created["diaperLog"];
    assert_eq!(log["wet"], true);
    assert_eq!(log["stoolColor"], Value::Null);
    let id = log["id"].as_str().unwrap().to_string();

    let (status, replaced) = app
        .send(
            Method::PUT,
            &format!("/api/diapers/{}", id),
            Some(json!({"timestamp": NOW, "dirty": true, "stoolColor": "yellow", "notes": "after nap"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["diaperLog"]["id"], id.as_str());
    assert_eq!(replaced["diaperLog"]["stoolColor"], "yellow");

    let (_, list) = app.send(Method::GET, "/api/diapers", None).await;
    let logs = list["diaperLogs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["notes"], "after nap");

    let (status, _) = app.send(Method::DELETE, &format!("/api/diapers/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = app.send(Method::GET, "/api/diapers", None).await;
    assert_eq!(list["diaperLogs"], json!([]));
}

#[tokio::test]
async fn test_daily_summary() {
    let app = TestApp::new();
    app.send(
        Method::POST,
        "/api/feedings",
        Some(json!({"endTime": NOW, "amountMl": 100.0, "durationMinutes": 15})),
    )
    .await;
    app.send(
        Method::POST,
        "/api/diapers",
        Some(json!({"timestamp": NOW - 24 * 60 * MINUTE, "dirty": true})),
    )
    .await;

    let (status, summary) = app
        .send(Method::GET, "/api/summary/daily?days=2&utcOffsetMinutes=0", None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let feedings = summary["feedings"].as_array().unwrap();
    assert_eq!(feedings.len(), 2);
    assert_eq!(feedings[1]["date"], "2023-11-14");
    assert_eq!(feedings[1]["feedCount"], 1);
    assert_eq!(feedings[1]["totalDurationMinutes"], 15);

    let diapers = summary["diapers"].as_array().unwrap();
    assert_eq!(diapers[0]["date"], "2023-11-13");
    assert_eq!(diapers[0]["dirtyCount"], 1);
    assert_eq!(diapers[1]["total"], 0);
}

#[tokio::test]
async fn test_frontend_log_forwarding() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/logs",
            Some(json!({"level": "warn", "message": "service worker stale", "component": "sw"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}
