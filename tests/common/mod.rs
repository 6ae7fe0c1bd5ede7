#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use supply_chain_admin::{
    db::{self, DbPool, DocumentStore},
    handlers::{self, AppState},
};

pub struct TestApp {
    pub router: Router,
    pub store: DocumentStore,
    pool: DbPool,
    db_path: PathBuf,
}

// Helper function to set up a fresh database and router per test
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_connections(1).await
}

pub async fn setup_test_app_with_connections(max_connections: u32) -> TestApp {
    let db_path = std::env::temp_dir().join(format!("supply_chain_test_{}.db", Uuid::new_v4()));
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = db::init_db_pool(&database_url, max_connections)
        .await
        .expect("Failed to initialize database");
    let store = DocumentStore::new(pool.clone());
    let router = handlers::router(AppState {
        store: store.clone(),
    });

    TestApp {
        router,
        store,
        pool,
        db_path,
    }
}

// Helper function to clean up the test database
pub async fn teardown_test_app(app: TestApp) {
    app.pool.close().await;

    let path = app.db_path.display().to_string();
    for file in [path.clone(), format!("{path}-wal"), format!("{path}-shm")] {
        let _ = std::fs::remove_file(file);
    }
}

/// Send one request through the router and decode the JSON answer
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
