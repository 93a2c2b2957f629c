use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::{ColorSample, Emotion, MovieCandidate};
use crate::services::{aggregate, merge, selection, telemetry::ExperimentLogger};

/// At most two dominant emotions drive the recommendation queries.
const DOMINANT_K: usize = 2;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct AddColorRequest {
    pub hex: String,
}

#[derive(Debug, Serialize)]
pub struct EmotionsResponse {
    pub emotions: Vec<Emotion>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub emotions: Vec<Emotion>,
    pub per_emotion: HashMap<String, Vec<MovieCandidate>>,
    pub combined_top10: Vec<MovieCandidate>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Adds a color to the working selection and returns its sample, emotion
/// estimates included.
pub async fn add_color(
    State(state): State<super::AppState>,
    Json(request): Json<AddColorRequest>,
) -> AppResult<(StatusCode, Json<ColorSample>)> {
    let sample = selection::build_sample(&state.palette, &request.hex)?;

    let mut selection = state.selection.write().await;
    selection.add(sample.clone());

    tracing::info!(hex = %sample.hex, top1 = %sample.top1.label, count = selection.len(), "Color added");

    Ok((StatusCode::CREATED, Json(sample)))
}

/// Current selection, in insertion order.
pub async fn list_colors(State(state): State<super::AppState>) -> Json<Vec<ColorSample>> {
    let selection = state.selection.read().await;
    Json(selection.samples().to_vec())
}

/// Removes one sample by its position in the selection.
pub async fn remove_color(
    State(state): State<super::AppState>,
    Path(index): Path<usize>,
) -> AppResult<StatusCode> {
    let mut selection = state.selection.write().await;
    match selection.remove(index) {
        Some(sample) => {
            tracing::info!(hex = %sample.hex, count = selection.len(), "Color removed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::NotFound(format!("no color at index {index}"))),
    }
}

/// Empties the selection.
pub async fn clear_colors(State(state): State<super::AppState>) -> StatusCode {
    state.selection.write().await.clear();
    StatusCode::NO_CONTENT
}

/// The dominant emotions inferred from the current selection. Empty when no
/// sample contributes a canonical label.
pub async fn inferred_emotions(State(state): State<super::AppState>) -> Json<EmotionsResponse> {
    let selection = state.selection.read().await;
    let emotions = aggregate::calc_dominant_emotions(selection.samples(), DOMINANT_K);
    Json(EmotionsResponse { emotions })
}

/// Runs the full pipeline for the current selection: infer, query per
/// emotion, merge, respond, then fire the experiment record.
pub async fn recommend(
    State(state): State<super::AppState>,
) -> AppResult<Json<RecommendResponse>> {
    // Snapshot under the read lock; the network round trips run lock-free.
    let samples: Vec<ColorSample> = state.selection.read().await.samples().to_vec();

    let emotions = aggregate::calc_dominant_emotions(&samples, DOMINANT_K);
    if emotions.is_empty() {
        return Err(AppError::InvalidInput(
            "no dominant emotion could be inferred from the selection".to_string(),
        ));
    }

    let outcome = merge::recommend_for_emotions(state.recommender.as_ref(), &emotions).await?;

    let record = ExperimentLogger::build_record(&samples, &outcome);
    state.logger.log_in_background(record);

    let per_emotion = outcome.per_emotion_map();
    Ok(Json(RecommendResponse {
        emotions: outcome.emotions,
        per_emotion,
        combined_top10: outcome.combined_top10,
    }))
}
