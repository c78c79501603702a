use std::sync::Arc;
use std::time::Instant;

use uniportal_core::application::UniportalService;
use uniportal_core::infrastructure::cache::InMemoryResponseCache;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: UniportalService,
    pub cache: Arc<InMemoryResponseCache>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: UniportalService,
        cache: Arc<InMemoryResponseCache>,
    ) -> Self {
        Self {
            args,
            service,
            cache,
            started_at: Instant::now(),
        }
    }
}
