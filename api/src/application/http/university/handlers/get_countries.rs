use axum::extract::State;
use serde::{Deserialize, Serialize};
use uniportal_core::domain::university::ports::UniversityService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetCountriesResponse {
    pub status: String,
    pub data: Vec<String>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/countries",
    tag = "university",
    summary = "Distinct countries, sorted",
    responses(
        (status = 200, body = GetCountriesResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn get_countries(
    State(state): State<AppState>,
) -> Result<Response<GetCountriesResponse>, ApiError> {
    let countries = state.service.list_countries().await?;

    Ok(Response::OK(GetCountriesResponse {
        status: "success".to_string(),
        count: countries.len(),
        data: countries,
    }))
}
