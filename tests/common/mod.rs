#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use tourlog::catalog::Catalog;
use tourlog::config::Config;
use tourlog::events::EventLogger;
use tourlog::store::{LogRecord, LogStore, StoreError};
use tourlog::time::Clock;

/// 2024-01-05 00:03:07 UTC, which is 09:03:07 the same day in Tokyo.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 0, 3, 7).unwrap()
}

pub const FIXED_TIMESTAMP: &str = "2024/01/05 09:03:07";

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Keeps every inserted row in memory.
#[derive(Default)]
pub struct RecordingStore {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingStore {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for RecordingStore {
    async fn insert(&self, record: &LogRecord) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Rejects every insert with the same message, counting attempts.
pub struct FailingStore {
    message: String,
    attempts: Mutex<usize>,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            attempts: Mutex::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl LogStore for FailingStore {
    async fn insert(&self, _record: &LogRecord) -> Result<(), StoreError> {
        *self.attempts.lock().unwrap() += 1;
        Err(StoreError::from(self.message.as_str()))
    }
}

/// Create a scratch public directory holding the given files.
pub fn public_dir(files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tourlog_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    ));
    std::fs::create_dir_all(&dir).expect("Failed to create public dir");
    for (name, contents) in files {
        std::fs::write(dir.join(name), contents).expect("Failed to write public file");
    }
    dir
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub public_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the log endpoint, return (body, status).
    pub async fn post_log(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/log"))
            .json(data)
            .send()
            .await
            .expect("log request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a path and return (raw body, status).
    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }
}

pub fn test_config(public_dir: &Path) -> Config {
    Config {
        supabase_url: "http://127.0.0.1:0".to_string(),
        supabase_key: "test-key".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        public_dir: public_dir.to_path_buf(),
        max_body_size: 102_400,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app serving `public_dir` and logging into `store` with the clock pinned.
pub async fn spawn_app(store: Arc<dyn LogStore>, public_dir: PathBuf) -> TestApp {
    let config = test_config(&public_dir);
    let catalog = Catalog::load(&public_dir);
    let logger = EventLogger::new(store, Arc::new(FixedClock(fixed_instant())));

    let app = tourlog::build_app(config, catalog, logger);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        public_dir,
    }
}

/// Spawn with the usual fixture files and a recording store.
pub async fn spawn_default() -> (TestApp, Arc<RecordingStore>) {
    let dir = public_dir(&[
        ("regions.json", r#"[{"id":"r1"}]"#),
        ("pois.json", r#"[{"id":"p1","regionId":"r1"}]"#),
        ("courses.json", r#"[]"#),
        ("index.html", "<!doctype html><title>tour</title>"),
    ]);
    let store = Arc::new(RecordingStore::default());
    let app = spawn_app(store.clone(), dir).await;
    (app, store)
}

/// Remove the scratch public directory.
pub async fn cleanup(app: TestApp) {
    let _ = std::fs::remove_dir_all(&app.public_dir);
}
