//! HTTP-level integration tests for the `/cats` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::SqlitePool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/cats",
        serde_json::json!({
            "name": "Tom",
            "years_experience": 3,
            "breed": "siamese",
            "salary": 1000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Tom");
    assert_eq!(json["years_experience"], 3);
    assert_eq!(json["breed"], "siamese");
    assert_eq!(json["salary"], 1000.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_with_unknown_breed_returns_422(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/cats",
        serde_json::json!({
            "name": "Tom",
            "years_experience": 3,
            "breed": "dragon",
            "salary": 1000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Unknown cat breed");

    // Nothing was written.
    let list = body_json(get(common::build_test_app(pool), "/cats").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_with_invalid_numbers_returns_422(pool: SqlitePool) {
    let cases = [
        serde_json::json!({"name": "A", "years_experience": -1, "breed": "bengal", "salary": 10}),
        serde_json::json!({"name": "B", "years_experience": 1, "breed": "bengal", "salary": 0}),
        serde_json::json!({"name": "C", "years_experience": 1, "breed": "bengal", "salary": -5}),
    ];

    for body in cases {
        let response = post_json(common::build_test_app(pool.clone()), "/cats", body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "expected 422 for {body}"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_with_missing_field_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/cats",
        serde_json::json!({"name": "Tom", "breed": "siamese", "salary": 10}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("years_experience"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_with_malformed_json_returns_400_envelope(pool: SqlitePool) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/cats")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Tom\","))
        .unwrap();

    let response = common::build_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_cat_id_returns_400_envelope(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/cats/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cat_with_padded_breed_returns_422(pool: SqlitePool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/cats",
        serde_json::json!({
            "name": "Tom",
            "years_experience": 3,
            "breed": "  siamese  ",
            "salary": 1000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "Unknown cat breed");

    let list = body_json(get(common::build_test_app(pool), "/cats").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_breed_source_failure_returns_502(pool: SqlitePool) {
    let app = common::build_test_app_with_breeds(pool, Arc::new(common::DownBreeds));
    let response = post_json(
        app,
        "/cats",
        serde_json::json!({
            "name": "Tom",
            "years_experience": 3,
            "breed": "siamese",
            "salary": 1000,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_cat_by_id(pool: SqlitePool) {
    let id = common::create_cat(&pool, "Get Me").await;

    let response = get(common::build_test_app(pool), &format!("/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_cat_returns_404(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/cats/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Cat with id 999999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_cats(pool: SqlitePool) {
    common::create_cat(&pool, "C1").await;
    common::create_cat(&pool, "C2").await;

    let response = get(common::build_test_app(pool), "/cats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["C1", "C2"]);
}

// ---------------------------------------------------------------------------
// Salary patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_salary_replaces_value(pool: SqlitePool) {
    let id = common::create_cat(&pool, "Payday").await;

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/cats/{id}"),
        serde_json::json!({"salary": 2500.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["salary"], 2500.5);

    let stored = body_json(get(common::build_test_app(pool), &format!("/cats/{id}")).await).await;
    assert_eq!(stored["salary"], 2500.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_salary_ignores_other_fields(pool: SqlitePool) {
    let id = common::create_cat(&pool, "Fixed").await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/cats/{id}"),
        serde_json::json!({"salary": 1200, "name": "Renamed", "breed": "bengal"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Fixed");
    assert_eq!(json["breed"], "siamese");
    assert_eq!(json["salary"], 1200.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_non_positive_salary_is_rejected_and_unchanged(pool: SqlitePool) {
    let id = common::create_cat(&pool, "Frugal").await;

    for salary in [0.0, -10.0] {
        let response = patch_json(
            common::build_test_app(pool.clone()),
            &format!("/cats/{id}"),
            serde_json::json!({ "salary": salary }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    let stored = body_json(get(common::build_test_app(pool), &format!("/cats/{id}")).await).await;
    assert_eq!(stored["salary"], 1000.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_salary_of_missing_cat_returns_404(pool: SqlitePool) {
    let response = patch_json(
        common::build_test_app(pool),
        "/cats/424242",
        serde_json::json!({"salary": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cat_returns_204(pool: SqlitePool) {
    let id = common::create_cat(&pool, "Delete Me").await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let response = get(common::build_test_app(pool), &format!("/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_cat_returns_404(pool: SqlitePool) {
    let response = delete(common::build_test_app(pool), "/cats/31337").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cat_holding_mission_returns_409(pool: SqlitePool) {
    let id = common::create_cat(&pool, "Busy").await;
    common::create_mission(&pool, Some(id), &["A"]).await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(common::build_test_app(pool), &format!("/cats/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
