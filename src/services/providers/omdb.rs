//! OMDb (Open Movie Database) provider
//!
//! Exact-title lookups via `GET /?apikey=..&t=..`. OMDb reports misses in the
//! body rather than the status code, so a 200 can still mean "not found".

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MovieDetails, OmdbResponse},
    services::providers::MovieDatabase,
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: format!("{}/", api_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.omdb_api_key.clone(),
            &config.omdb_api_url,
            Duration::from_secs(config.metadata_timeout_secs),
        )
    }
}

/// The request URL carries the API key in its query string
fn strip_url(e: reqwest::Error) -> AppError {
    AppError::HttpClient(e.without_url())
}

#[async_trait::async_trait]
impl MovieDatabase for OmdbProvider {
    async fn lookup_title(&self, title: &str) -> AppResult<Option<MovieDetails>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Title lookup cannot be empty".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await
            .map_err(strip_url)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb returned status {}: {}",
                status, body
            )));
        }

        let omdb: OmdbResponse = response.json().await.map_err(strip_url)?;

        if !omdb.is_found() {
            tracing::debug!(
                title = %title,
                reason = omdb.error.as_deref().unwrap_or("unknown"),
                provider = "omdb",
                "Title not found"
            );
            return Ok(None);
        }

        tracing::info!(title = %title, provider = "omdb", "Title metadata fetched");

        Ok(omdb.into_details())
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
