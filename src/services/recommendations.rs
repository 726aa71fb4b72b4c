use crate::{
    models::{DisplayCard, PersonalityInput},
    services::{
        extraction::{parse_suggestions, ExtractError},
        prompt::build_prompt,
        providers::{LanguageModel, MovieDatabase},
    },
};

/// Non-fatal upstream failure surfaced next to the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The model call failed; the pipeline continued with empty text
    ModelUnavailable(String),
    /// A metadata lookup failed; the card falls back to "not found"
    MetadataUnavailable { title: String, message: String },
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One card per usable suggestion, in model order
    Cards(Vec<DisplayCard>),
    /// Parsed fine but nothing usable came back
    Empty,
    /// No bracketed array in the model output
    Unparseable { raw: String },
    /// An array-like substring that is not valid JSON
    Malformed { raw: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationReport {
    pub notices: Vec<Notice>,
    pub outcome: Outcome,
}

/// Runs one submission through prompt, model, extraction and enrichment.
///
/// Never fails: every upstream or parse problem ends up in the report.
/// Metadata lookups run one at a time in suggestion order.
pub async fn recommend(
    model: &dyn LanguageModel,
    movie_db: &dyn MovieDatabase,
    input: &PersonalityInput,
) -> RecommendationReport {
    let mut notices = Vec::new();
    let prompt = build_prompt(input);

    let raw = match model.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, provider = model.name(), "Model call failed");
            notices.push(Notice::ModelUnavailable(e.to_string()));
            String::new()
        }
    };

    let suggestions = match parse_suggestions(&raw) {
        Ok(suggestions) => suggestions,
        Err(ExtractError::NoArray) => {
            tracing::warn!(raw_len = raw.len(), "Model output has no JSON array");
            return RecommendationReport {
                notices,
                outcome: Outcome::Unparseable { raw },
            };
        }
        Err(e @ ExtractError::Malformed(_)) => {
            tracing::warn!(error = %e, "Model output could not be decoded");
            return RecommendationReport {
                notices,
                outcome: Outcome::Malformed {
                    raw,
                    reason: e.to_string(),
                },
            };
        }
    };

    if suggestions.is_empty() {
        return RecommendationReport {
            notices,
            outcome: Outcome::Empty,
        };
    }

    let mut cards = Vec::with_capacity(suggestions.len());
    for suggestion in suggestions {
        let details = match movie_db.lookup_title(&suggestion.title).await {
            Ok(details) => details,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    title = %suggestion.title,
                    provider = movie_db.name(),
                    "Metadata lookup failed"
                );
                notices.push(Notice::MetadataUnavailable {
                    title: suggestion.title.clone(),
                    message: e.to_string(),
                });
                None
            }
        };
        cards.push(DisplayCard {
            suggestion,
            details,
        });
    }

    tracing::info!(
        cards = cards.len(),
        enriched = cards.iter().filter(|c| c.details.is_some()).count(),
        "Recommendations assembled"
    );

    RecommendationReport {
        notices,
        outcome: Outcome::Cards(cards),
    }
}
