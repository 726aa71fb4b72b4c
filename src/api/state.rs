use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::providers::{HuggingFaceProvider, LanguageModel, MovieDatabase, OmdbProvider},
};

/// Shared application state
///
/// Holds only the upstream clients; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub language_model: Arc<dyn LanguageModel>,
    pub movie_db: Arc<dyn MovieDatabase>,
}

impl AppState {
    pub fn new(language_model: Arc<dyn LanguageModel>, movie_db: Arc<dyn MovieDatabase>) -> Self {
        Self {
            language_model,
            movie_db,
        }
    }

    /// Builds the Hugging Face and OMDb clients from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let language_model = HuggingFaceProvider::from_config(config)?;
        let movie_db = OmdbProvider::from_config(config)?;

        tracing::info!(
            model_endpoint = %language_model.endpoint(),
            "Upstream providers configured"
        );

        Ok(Self::new(Arc::new(language_model), Arc::new(movie_db)))
    }
}
