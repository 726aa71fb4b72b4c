use serde::{Deserialize, Serialize};

/// One `{title, reason}` pair proposed by the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub reason: String,
}

/// Descriptive facts about a movie from the metadata database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub plot: String,
    /// Poster URL, `None` when the database has no image
    pub poster: Option<String>,
    pub director: String,
}

/// A suggestion together with whatever metadata was found for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCard {
    pub suggestion: Suggestion,
    pub details: Option<MovieDetails>,
}

// ============================================================================
// OMDb API Types
// ============================================================================

const OMDB_MISSING: &str = "N/A";

/// Raw title lookup response from OMDb
///
/// OMDb always answers 200 and signals misses with `"Response": "False"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbResponse {
    pub response: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OmdbResponse {
    pub fn is_found(&self) -> bool {
        self.response == "True"
    }

    /// Converts a successful lookup into details, `None` on a miss
    pub fn into_details(self) -> Option<MovieDetails> {
        if !self.is_found() {
            return None;
        }

        let or_missing = |field: Option<String>| field.unwrap_or_else(|| OMDB_MISSING.to_string());

        Some(MovieDetails {
            title: or_missing(self.title),
            year: or_missing(self.year),
            plot: or_missing(self.plot),
            poster: self
                .poster
                .filter(|p| !p.is_empty() && p != OMDB_MISSING),
            director: or_missing(self.director),
        })
    }
}

// ============================================================================
// Hugging Face Inference API Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

/// One element of the text-generation response array
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: Option<String>,
}
