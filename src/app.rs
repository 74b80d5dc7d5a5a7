use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
    routing::{delete, get, post},
};
use tower_http::{
    LatencyUnit,
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info_span};

use crate::{
    config::AppConfig,
    handlers::{clear_scores, get_stats, healthcheck, save_score},
    state::AppState,
};

pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/getStats", get(get_stats))
        .route("/api/saveScore", post(save_score))
        .route("/api/clearScores", delete(clear_scores))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list([config.allowed_origin.clone()]))
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
