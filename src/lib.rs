pub mod cms;
pub mod config;
pub mod errors;
pub mod inject;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use std::sync::Arc;

use cms::{ContentSource, CosmicClient, FixtureSource};

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub config: config::AppConfig,
}

impl AppState {
    /// Pick the content source the configuration asks for.
    pub fn from_config(config: config::AppConfig) -> Result<Self, cms::CmsError> {
        let content: Arc<dyn ContentSource> = match &config.cms_fixtures_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Serving content from fixtures");
                Arc::new(FixtureSource::from_json_file(path)?)
            }
            None => Arc::new(CosmicClient::new(&config)?),
        };

        Ok(Self { content, config })
    }
}
