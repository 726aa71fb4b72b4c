use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Fallback choices offered when the mood text field is left blank
pub const MOOD_CHOICES: [&str; 5] = ["Happy", "Melancholic", "Anxious", "Excited", "Calm"];

/// Fallback choices offered when the hobby text field is left blank
pub const HOBBY_CHOICES: [&str; 5] = ["Reading", "Traveling", "Gaming", "Cooking", "Photography"];

/// Fallback choices offered when the vibe text field is left blank
pub const VIBE_CHOICES: [&str; 5] = ["Quirky", "Serious", "Dreamy", "Adventurous", "Relaxed"];

/// Preferred movie genre
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Action,
    Drama,
    Comedy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Romance,
    Thriller,
    Mystery,
    Fantasy,
}

impl Genre {
    /// All genres in display order
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Drama,
        Genre::Comedy,
        Genre::SciFi,
        Genre::Romance,
        Genre::Thriller,
        Genre::Mystery,
        Genre::Fantasy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::SciFi => "Sci-Fi",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
            Genre::Mystery => "Mystery",
            Genre::Fantasy => "Fantasy",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validated personality attributes for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalityInput {
    pub mood: String,
    pub hobby: String,
    pub genre: Genre,
    pub vibe: String,
}

/// Raw form submission
///
/// Each of mood, hobby and vibe has a free-text field and a fallback select.
/// The text wins whenever it holds anything besides whitespace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalityForm {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub mood_choice: String,
    #[serde(default)]
    pub hobby: String,
    #[serde(default)]
    pub hobby_choice: String,
    #[serde(default)]
    pub genre: Genre,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub vibe_choice: String,
}

fn resolve(text: &str, choice: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        choice.trim().to_string()
    } else {
        text.to_string()
    }
}

impl PersonalityForm {
    /// Resolves each attribute from its text field or fallback choice and
    /// rejects the submission when any of them ends up empty.
    pub fn validate(&self) -> AppResult<PersonalityInput> {
        let input = PersonalityInput {
            mood: resolve(&self.mood, &self.mood_choice),
            hobby: resolve(&self.hobby, &self.hobby_choice),
            genre: self.genre,
            vibe: resolve(&self.vibe, &self.vibe_choice),
        };

        if input.mood.is_empty() || input.hobby.is_empty() || input.vibe.is_empty() {
            return Err(AppError::InvalidInput(
                "Please fill in all the fields or pick from the dropdowns.".to_string(),
            ));
        }

        Ok(input)
    }
}
