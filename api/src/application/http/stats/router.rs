use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

use super::handlers::{
    get_country_stats::{__path_get_country_stats, get_country_stats},
    get_overview_stats::{__path_get_overview_stats, get_overview_stats},
};
use crate::application::http::server::{app_state::AppState, cache::cached};

#[derive(OpenApi)]
#[openapi(paths(get_country_stats, get_overview_stats))]
pub struct StatsApiDoc;

const COUNTRY_STATS_CACHE_TTL_SECS: u64 = 1800;
const OVERVIEW_CACHE_TTL_SECS: u64 = 600;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();
    let cache = state.cache;

    Router::new()
        .route(
            &format!("{root}/stats/countries/all"),
            cached(
                get(get_country_stats),
                &cache,
                COUNTRY_STATS_CACHE_TTL_SECS,
            ),
        )
        .route(
            &format!("{root}/stats"),
            cached(get(get_overview_stats), &cache, OVERVIEW_CACHE_TTL_SECS),
        )
}
