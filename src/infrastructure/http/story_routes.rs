//! Story API routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::{error_response, rejection_response, ApiError};
use crate::application::dto::{ComposeResponseDto, StoryRequestDto, StoryResponseDto};
use crate::application::services::catalog::StoryProfile;
use crate::application::services::StoryServiceError;
use crate::domain::value_objects::GenerationParameters;
use crate::infrastructure::state::AppState;

fn service_error(e: StoryServiceError) -> ApiError {
    let status = match &e {
        StoryServiceError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
        StoryServiceError::GenerationFailure(_) => StatusCode::BAD_GATEWAY,
    };
    if status.is_server_error() {
        tracing::error!("Story generation failed: {}", e);
    }
    error_response(status, e)
}

fn parse_request(req: StoryRequestDto) -> Result<GenerationParameters, ApiError> {
    GenerationParameters::try_from(req).map_err(|e| error_response(StatusCode::BAD_REQUEST, e))
}

/// Compose the generation prompt without generating
pub async fn compose_prompt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StoryRequestDto>, JsonRejection>,
) -> Result<Json<ComposeResponseDto>, ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    let params = parse_request(req)?;
    let prompt = state.story_service.compose(&params).map_err(service_error)?;

    Ok(Json(ComposeResponseDto {
        prompt: prompt.into_string(),
        profile: StoryProfile::from_parameters(&params),
    }))
}

/// Generate a story
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StoryRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<StoryResponseDto>), ApiError> {
    let Json(req) = payload.map_err(rejection_response)?;
    let params = parse_request(req)?;
    let story = state
        .story_service
        .generate(params)
        .await
        .map_err(service_error)?;

    Ok((StatusCode::CREATED, Json(StoryResponseDto::from(story))))
}
