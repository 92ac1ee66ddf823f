//! Text analytics routes

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use super::{rejection_response, ApiError};
use crate::application::dto::AnalyticsRequestDto;
use crate::application::services::text_analyzer::{StoryReport, DEFAULT_KEYWORD_LIMIT};
use crate::infrastructure::state::AppState;

/// Analyze submitted text
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyticsRequestDto>, JsonRejection>,
) -> Result<Json<StoryReport>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    let limit = req.keyword_limit.unwrap_or(DEFAULT_KEYWORD_LIMIT);
    Ok(Json(state.story_service.analyze(&req.text, limit)))
}
