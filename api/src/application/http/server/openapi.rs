use utoipa::OpenApi;

use crate::application::http::health::HealthApiDoc;
use crate::application::http::stats::router::StatsApiDoc;
use crate::application::http::university::router::UniversityApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "University Search Portal API",
        description = "Search, browse and aggregate statistics over a read-only university record store."
    ),
    tags(
        (name = "university", description = "Search, suggestions, detail lookup and reference lists"),
        (name = "stats", description = "Aggregate statistics over the collection"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(UniversityApiDoc::openapi());
        doc.merge(StatsApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
