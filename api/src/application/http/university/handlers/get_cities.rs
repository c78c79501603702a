use axum::extract::{Query, State};
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
use crate::application::http::university::validators::CitiesParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetCitiesResponse {
    pub status: String,
    pub data: Vec<String>,
    pub count: usize,
    /// The country filter in effect, or "all".
    pub country: String,
}

#[utoipa::path(
    get,
    path = "/cities",
    tag = "university",
    summary = "Distinct cities, optionally narrowed to one country",
    params(CitiesParams),
    responses(
        (status = 200, body = GetCitiesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn get_cities(
    State(state): State<AppState>,
    Query(params): Query<CitiesParams>,
) -> Result<Response<GetCitiesResponse>, ApiError> {
    params.validate()?;

    let country = params.country.clone().unwrap_or_else(|| "all".to_string());
    let cities = state.service.list_cities(params.country).await?;

    Ok(Response::OK(GetCitiesResponse {
        status: "success".to_string(),
        count: cities.len(),
        data: cities,
        country,
    }))
}
