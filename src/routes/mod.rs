mod draft_settings;
mod health;
mod players;

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, Request, Uri, header};
use axum::response::Response;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::config::{Config, Environment};
use crate::error::AppError;
use crate::state::AppState;

/// Build the route table.
///
/// Structure:
/// - `GET /api/health` — liveness check
/// - `GET /api/players` — players, optional `position` filter
/// - `GET /api/positions` — distinct positions
/// - `POST /api/draft-settings` — echo draft settings
pub fn router() -> Router<AppState> {
    let api = Router::new()
        .merge(health::router())
        .merge(players::router())
        .merge(draft_settings::router());

    Router::new().nest("/api", api).fallback(not_found)
}

/// Build the served application: routes, state, CORS and request tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                status_code = tracing::field::Empty,
            )
        })
        .on_response(|response: &Response, latency: Duration, span: &Span| {
            span.record("status_code", response.status().as_u16());
            tracing::info!(latency_ms = latency.as_millis(), "response");
        });

    router()
        .with_state(state)
        .layer(cors_layer(config))
        .layer(trace)
}

/// Any origin outside production; only `FRONTEND_URL` in production.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.environment != Environment::Production {
        return CorsLayer::permissive();
    }

    let origin = config.frontend_url.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!(frontend_url = %config.frontend_url, "Invalid FRONTEND_URL, using default");
        HeaderValue::from_static("http://localhost:3000")
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
