use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::admin;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/super-admin", admin::create_super_admin_router())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Router plus the Prometheus scrape endpoint when metrics are enabled
pub fn create_router_with_metrics(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let router = create_router(state);

    match metrics {
        Some(metrics) => router.merge(create_metrics_router(metrics)),
        None => router,
    }
}
