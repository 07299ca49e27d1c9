#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use spycat_api::app;
use spycat_api::config::{ServerConfig, DEFAULT_BREEDS_API_URL};
use spycat_api::state::AppState;
use spycat_core::breeds::{BreedCatalog, BreedSource, BreedSourceError};

/// Breeds recognised by [`StaticBreeds`].
pub const KNOWN_BREEDS: &[&str] = &["Siamese", "Maine Coon", "Bengal", "Sphynx"];

/// In-memory breed source serving [`KNOWN_BREEDS`].
pub struct StaticBreeds;

#[async_trait]
impl BreedSource for StaticBreeds {
    async fn fetch_breeds(&self) -> Result<Vec<String>, BreedSourceError> {
        Ok(KNOWN_BREEDS.iter().map(|b| b.to_string()).collect())
    }
}

/// Breed source that is always unreachable.
pub struct DownBreeds;

#[async_trait]
impl BreedSource for DownBreeds {
    async fn fetch_breeds(&self) -> Result<Vec<String>, BreedSourceError> {
        Err(BreedSourceError::Status {
            status: 503,
            body: "maintenance".to_string(),
        })
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        breeds_api_url: DEFAULT_BREEDS_API_URL.to_string(),
        breeds_timeout_secs: 10,
    }
}

/// Build the full application router, as `main.rs` does, backed by the
/// given pool and the static breed list.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_breeds(pool, Arc::new(StaticBreeds))
}

/// Build the full application router with a custom breed source.
pub fn build_test_app_with_breeds(pool: SqlitePool, source: Arc<dyn BreedSource>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        breeds: Arc::new(BreedCatalog::new(source)),
    };
    app::build_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a cat through the API and return its id.
pub async fn create_cat(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/cats",
        serde_json::json!({
            "name": name,
            "years_experience": 3,
            "breed": "siamese",
            "salary": 1000.0,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a mission through the API and return the response body.
pub async fn create_mission(
    pool: &SqlitePool,
    cat_id: Option<i64>,
    target_names: &[&str],
) -> serde_json::Value {
    let targets: Vec<_> = target_names
        .iter()
        .map(|name| serde_json::json!({"name": name, "country": "X"}))
        .collect();
    let response = post_json(
        build_test_app(pool.clone()),
        "/missions",
        serde_json::json!({"cat_id": cat_id, "targets": targets}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
