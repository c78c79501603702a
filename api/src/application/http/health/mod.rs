use axum::Router;
use axum::extract::State;
use axum::routing::get;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uniportal_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();

    Router::new()
        .route(&format!("{root}/health"), get(health))
        .route(&format!("{root}/health/readiness"), get(readiness))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the process started.
    pub uptime: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "success".to_string(),
        message: "University Search Portal API is running".to_string(),
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs(),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/health/readiness",
    tag = "health",
    summary = "Readiness probe, pings the database",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let database = state.service.readiness().await?;

    Ok(Response::OK(ReadinessResponse {
        status: "success".to_string(),
        data: database,
    }))
}
