use axum::extract::State;
use serde::{Deserialize, Serialize};
use uniportal_core::domain::university::{
    ports::UniversityService, value_objects::OverviewStats,
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
pub struct GetOverviewStatsResponse {
    pub status: String,
    pub data: OverviewStats,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    summary = "Collection overview: totals, top countries, top types, recent updates",
    responses(
        (status = 200, body = GetOverviewStatsResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn get_overview_stats(
    State(state): State<AppState>,
) -> Result<Response<GetOverviewStatsResponse>, ApiError> {
    let stats = state.service.overview_stats().await?;

    Ok(Response::OK(GetOverviewStatsResponse {
        status: "success".to_string(),
        data: stats,
    }))
}
