//! Shared application state for the web server.

use std::sync::Arc;
use chronicare_common::DatasetSource;
use minijinja::Environment;

/// Shared state injected into every Axum handler. Immutable after startup.
pub struct AppState {
    pub source: Arc<dyn DatasetSource>,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            templates: crate::render::templates(),
        }
    }
}

pub type SharedState = Arc<AppState>;
