use crate::ingest::IngestPipeline;
use crate::settings::AppSettings;
use crate::store::AlbumStore;
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared state handed to every handler. The store client and the pipeline
/// built on top of it are constructed once at startup and injected here.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn AlbumStore>,
    pub pipeline: Arc<IngestPipeline>,
    pub settings: AppSettings,
}

impl ApiContext {
    #[must_use]
    pub fn new(store: Arc<dyn AlbumStore>, settings: AppSettings) -> Self {
        let pipeline = Arc::new(IngestPipeline::new(store.clone(), settings.ingest.clone()));
        Self {
            store,
            pipeline,
            settings,
        }
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
