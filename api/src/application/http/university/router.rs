use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

use super::handlers::{
    get_cities::{__path_get_cities, get_cities},
    get_countries::{__path_get_countries, get_countries},
    get_university::{__path_get_university, get_university},
    search_universities::{__path_search_universities, search_universities},
    suggest_universities::{__path_suggest_universities, suggest_universities},
};
use crate::application::http::server::{app_state::AppState, cache::cached};

#[derive(OpenApi)]
#[openapi(paths(
    search_universities,
    suggest_universities,
    get_university,
    get_countries,
    get_cities
))]
pub struct UniversityApiDoc;

const SEARCH_CACHE_TTL_SECS: u64 = 300;
const SUGGEST_CACHE_TTL_SECS: u64 = 300;
const DETAIL_CACHE_TTL_SECS: u64 = 600;
const META_CACHE_TTL_SECS: u64 = 3600;

pub fn university_routes(state: AppState) -> Router<AppState> {
    let root = state.args.server.root_path.clone();
    let cache = state.cache;

    Router::new()
        .route(
            &format!("{root}/universities/search"),
            cached(get(search_universities), &cache, SEARCH_CACHE_TTL_SECS),
        )
        .route(
            &format!("{root}/universities/suggest"),
            cached(get(suggest_universities), &cache, SUGGEST_CACHE_TTL_SECS),
        )
        .route(
            &format!("{root}/countries"),
            cached(get(get_countries), &cache, META_CACHE_TTL_SECS),
        )
        .route(
            &format!("{root}/cities"),
            cached(get(get_cities), &cache, META_CACHE_TTL_SECS),
        )
        .route(
            &format!("{root}/universities/{{id}}"),
            cached(get(get_university), &cache, DETAIL_CACHE_TTL_SECS),
        )
}
