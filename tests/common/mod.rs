#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use draft_sim_api::config::{Config, Environment, PoolSettings};
use draft_sim_api::state::AppState;

/// In-memory `SQLite` database with all migrations applied.
pub async fn migrated_db() -> DatabaseConnection {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();
    db
}

/// In-memory database with migrations applied and reference players loaded.
pub async fn seeded_db() -> DatabaseConnection {
    let db = migrated_db().await;
    draft_sim_api::seed::seed_players(&db).await.ok();
    db
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        pool: PoolSettings::default(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        seed_on_startup: false,
    }
}

/// Build the app router around an existing database connection.
pub fn app_with_db(db: DatabaseConnection) -> Router {
    let state = AppState {
        db,
        config: test_config(),
    };
    draft_sim_api::routes::router().with_state(state)
}

/// Router backed by a seeded in-memory database.
pub async fn seeded_app() -> Router {
    app_with_db(seeded_db().await)
}

/// Full application (CORS and tracing layers included) for the given environment.
pub async fn served_app(environment: Environment) -> Router {
    let config = Config {
        environment,
        ..test_config()
    };
    let state = AppState {
        db: seeded_db().await,
        config: config.clone(),
    };
    draft_sim_api::routes::app(state, &config)
}

/// Send a request and return (status, headers) without reading the body.
pub async fn send_for_headers(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();
    (response.status(), response.headers().clone())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST a raw body with a JSON content type.
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST a raw body without any content type.
pub async fn post_untyped(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST a JSON value.
pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> (StatusCode, String) {
    post_raw(app, uri, &body.to_string()).await
}

/// Parse a response body, yielding `Null` on malformed JSON.
pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or(serde_json::Value::Null)
}
