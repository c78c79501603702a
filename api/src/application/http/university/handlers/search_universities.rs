use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use uniportal_core::domain::university::{
    entities::UniversitySummary,
    ports::UniversityService,
    value_objects::{
        PageDescriptor, PageQuery, SearchFilter, SearchFilterInput, SearchUniversitiesInput,
        SortSpec,
    },
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};
use crate::application::http::university::validators::SearchUniversitiesParams;
use validator::Validate;

/// The filter values the page was produced from, echoed back so clients can
/// render the active query without re-parsing the URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQueryEcho {
    pub search: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchUniversitiesResponse {
    pub status: String,
    pub data: Vec<UniversitySummary>,
    pub pagination: PageDescriptor,
    pub query: SearchQueryEcho,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/universities/search",
    tag = "university",
    summary = "Search and browse universities",
    params(SearchUniversitiesParams),
    responses(
        (status = 200, body = SearchUniversitiesResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    )
)]
pub async fn search_universities(
    State(state): State<AppState>,
    Query(params): Query<SearchUniversitiesParams>,
) -> Result<Response<SearchUniversitiesResponse>, ApiError> {
    params.validate()?;

    let query = SearchQueryEcho {
        search: params.search.clone(),
        country: params.country.clone(),
        city: params.city.clone(),
        name: params.name.clone(),
        kind: params.kind.clone(),
        status: params.status.clone(),
    };

    let input = SearchUniversitiesInput {
        filter: SearchFilter::new(SearchFilterInput {
            search: params.search,
            country: params.country,
            city: params.city,
            name: params.name,
            kind: params.kind,
            status: params.status,
        }),
        sort: SortSpec::new(params.sort_by.as_deref(), params.sort_order.as_deref()),
        page: PageQuery::new(params.page, params.limit),
    };

    let page = state.service.search_universities(input).await?;

    Ok(Response::OK(SearchUniversitiesResponse {
        status: "success".to_string(),
        count: page.records.len(),
        data: page.records,
        pagination: page.pagination,
        query,
    }))
}
