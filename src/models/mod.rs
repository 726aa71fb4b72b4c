pub mod movie;
pub mod personality;

pub use movie::{
    DisplayCard, GeneratedText, GenerationParameters, GenerationRequest, MovieDetails,
    OmdbResponse, Suggestion,
};
pub use personality::{
    Genre, PersonalityForm, PersonalityInput, HOBBY_CHOICES, MOOD_CHOICES, VIBE_CHOICES,
};
