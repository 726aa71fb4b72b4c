//! Hugging Face Inference API provider
//!
//! Issues a single text-generation request per prompt:
//! `POST {api_url}/{model}` with a bearer token, expecting
//! `[{"generated_text": "..."}]` back.

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{GeneratedText, GenerationParameters, GenerationRequest},
    services::providers::LanguageModel,
};

#[derive(Clone)]
pub struct HuggingFaceProvider {
    http_client: HttpClient,
    api_key: String,
    endpoint: String,
    parameters: GenerationParameters,
}

impl HuggingFaceProvider {
    pub fn new(
        api_key: String,
        api_url: &str,
        model: &str,
        parameters: GenerationParameters,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            endpoint: format!("{}/{}", api_url.trim_end_matches('/'), model),
            parameters,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.huggingface_api_key.clone(),
            &config.hf_api_url,
            &config.hf_model,
            GenerationParameters {
                max_new_tokens: config.max_new_tokens,
                temperature: config.temperature,
                return_full_text: false,
            },
            Duration::from_secs(config.model_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Pulls the text out of the first generation, empty when there is none
    fn first_generated_text(generations: Vec<GeneratedText>) -> String {
        generations
            .into_iter()
            .next()
            .and_then(|g| g.generated_text)
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LanguageModel for HuggingFaceProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let body = GenerationRequest {
            inputs: prompt,
            parameters: self.parameters.clone(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Hugging Face API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        let generations: Vec<GeneratedText> =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize Hugging Face response"
                );
                AppError::ExternalApi(format!("Unexpected Hugging Face response: {}", e))
            })?;

        let text = Self::first_generated_text(generations);

        tracing::info!(
            endpoint = %self.endpoint,
            generated_chars = text.len(),
            provider = "huggingface",
            "Generation completed"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
