//! State shared by every request handler.

use std::sync::Arc;

use crate::config::Config;
use crate::image_classifier::select::Classifier;
use crate::library::logger::interface::Logger;

pub struct AppState {
    pub config: Config,
    /// Chosen once before the listener starts. Read-only afterwards.
    pub classifier: Classifier,
    pub logger: Arc<dyn Logger + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Config,
        classifier: Classifier,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            config,
            classifier,
            logger: logger.with_namespace("server"),
        }
    }
}

pub type SharedState = Arc<AppState>;
