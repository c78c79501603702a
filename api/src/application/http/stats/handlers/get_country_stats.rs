use axum::extract::State;
use serde::{Deserialize, Serialize};
use uniportal_core::domain::university::{
    ports::UniversityService, value_objects::CountryCount,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetCountryStatsResponse {
    pub status: String,
    pub data: Vec<CountryCount>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/stats/countries/all",
    tag = "stats",
    summary = "Record counts for every country, highest first",
    responses(
        (status = 200, body = GetCountryStatsResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn get_country_stats(
    State(state): State<AppState>,
) -> Result<Response<GetCountryStatsResponse>, ApiError> {
    let counts = state.service.country_stats().await?;

    Ok(Response::OK(GetCountryStatsResponse {
        status: "success".to_string(),
        count: counts.len(),
        data: counts,
    }))
}
