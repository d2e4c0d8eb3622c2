//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert!(json["pool_size"].as_u64().unwrap() >= 1);
    assert!(json["idle_connections"].is_u64());
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn health_check_reports_degraded_when_pool_is_closed(pool: SqlitePool) {
    pool.close().await;
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["idle_connections"], 0);
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn closed_pool_surfaces_as_server_error(pool: SqlitePool) {
    pool.close().await;
    let app = common::build_test_app(pool);
    let response = get(app, "/fighters/1").await;

    assert!(response.status().is_server_error());
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn request_waiting_on_a_busy_pool_times_out_with_408(pool: SqlitePool) {
    let busy = common::single_connection_pool(&pool).await;
    let _held = busy.acquire().await.unwrap();

    let mut config = common::test_config();
    config.request_timeout_secs = 1;
    let app = common::build_test_app_with_config(busy.clone(), &config);
    let response = get(app, "/fighters/1").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrator = "roster_db::MIGRATOR")]
async fn cors_preflight_returns_correct_headers(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/fighters")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
}
