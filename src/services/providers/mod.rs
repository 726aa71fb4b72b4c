//! Upstream provider abstraction
//!
//! The pipeline talks to two external services: a hosted language model that
//! produces suggestions, and a movie database that enriches them. Each sits
//! behind a trait so the pipeline can run against mocks in tests.

use crate::{error::AppResult, models::MovieDetails};

pub mod huggingface;
pub mod omdb;

pub use huggingface::HuggingFaceProvider;
pub use omdb::OmdbProvider;

/// Text-generation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Runs one completion for the prompt and returns the generated text.
    ///
    /// Single attempt; transport, status and response-shape failures are errors.
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Title-keyed movie metadata lookup
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDatabase: Send + Sync {
    /// Looks up a movie by exact title.
    ///
    /// `Ok(None)` means the database answered but has no such title.
    async fn lookup_title(&self, title: &str) -> AppResult<Option<MovieDetails>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
