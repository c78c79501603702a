use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use uniportal_core::domain::university::{
    entities::UniversitySuggestion, ports::UniversityService,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};
use crate::application::http::university::validators::SuggestUniversitiesParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestUniversitiesResponse {
    pub status: String,
    pub data: Vec<UniversitySuggestion>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/universities/suggest",
    tag = "university",
    summary = "Lightweight name suggestions for autocomplete",
    params(SuggestUniversitiesParams),
    responses(
        (status = 200, body = SuggestUniversitiesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn suggest_universities(
    State(state): State<AppState>,
    Query(params): Query<SuggestUniversitiesParams>,
) -> Result<Response<SuggestUniversitiesResponse>, ApiError> {
    params.validate()?;

    let suggestions = state
        .service
        .suggest_universities(params.q.unwrap_or_default(), params.limit)
        .await?;

    Ok(Response::OK(SuggestUniversitiesResponse {
        status: "success".to_string(),
        count: suggestions.len(),
        data: suggestions,
    }))
}
