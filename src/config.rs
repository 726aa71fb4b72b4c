use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Hugging Face inference API token
    pub huggingface_api_key: String,

    /// OMDb API key
    pub omdb_api_key: String,

    /// Model repository served by the inference endpoint
    #[serde(default = "default_hf_model")]
    pub hf_model: String,

    /// Inference API base URL (the model id is appended)
    #[serde(default = "default_hf_api_url")]
    pub hf_api_url: String,

    /// OMDb base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Timeout for the model call in seconds
    #[serde(default = "default_model_timeout_secs")]
    pub model_timeout_secs: u64,

    /// Timeout for each metadata lookup in seconds
    #[serde(default = "default_metadata_timeout_secs")]
    pub metadata_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_hf_model() -> String {
    "HuggingFaceH4/zephyr-7b-beta".to_string()
}

fn default_hf_api_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com".to_string()
}

fn default_max_new_tokens() -> u32 {
    512
}

fn default_temperature() -> f32 {
    0.7
}

fn default_model_timeout_secs() -> u64 {
    30
}

fn default_metadata_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads an optional `.env` file first. Fails when either API key is
    /// missing or blank so the service never starts without credentials.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.huggingface_api_key.trim().is_empty() {
            anyhow::bail!("HUGGINGFACE_API_KEY must not be empty");
        }
        if self.omdb_api_key.trim().is_empty() {
            anyhow::bail!("OMDB_API_KEY must not be empty");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
