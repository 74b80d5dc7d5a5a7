use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::warn;

use crate::{
    error::{AppError, AppResult},
    models::{AggregateRecord, ApiMessage, HealthResponse, ScoreSubmission},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Vec<AggregateRecord>> {
    Json(state.store.fetch().await)
}

/// Every extractor rejection (missing JSON content type, bad syntax, wrong
/// field types, missing `score`) collapses into the same 400 response.
pub async fn save_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AggregateRecord>)> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected score submission");
        AppError::from(rejection)
    })?;

    let record = state.store.submit(submission).await;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn clear_scores(State(state): State<AppState>) -> Json<ApiMessage> {
    state.store.reset().await;
    Json(ApiMessage {
        message: "All scores cleared".to_string(),
    })
}
