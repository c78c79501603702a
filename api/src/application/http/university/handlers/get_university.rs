use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uniportal_core::domain::university::{entities::University, ports::UniversityService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetUniversityResponse {
    pub status: String,
    pub data: University,
}

#[utoipa::path(
    get,
    path = "/universities/{id}",
    tag = "university",
    summary = "Fetch one full university record",
    params(
        ("id" = String, Path, description = "Record id (UUID) or registry identifier"),
    ),
    responses(
        (status = 200, body = GetUniversityResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response<GetUniversityResponse>, ApiError> {
    match state.service.get_university(id).await? {
        Some(university) => Ok(Response::OK(GetUniversityResponse {
            status: "success".to_string(),
            data: university,
        })),
        None => Err(ApiError::NotFound("University not found".to_string())),
    }
}
