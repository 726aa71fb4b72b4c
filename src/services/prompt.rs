use crate::models::PersonalityInput;

/// Builds the model instruction for a set of personality traits.
///
/// Asks for 3 to 5 movies as a bare JSON array of `{title, reason}` objects.
pub fn build_prompt(input: &PersonalityInput) -> String {
    format!(
        r#"
Given the following personality traits:
- Mood: {mood}
- Hobby: {hobby}
- Preferred Genre: {genre}
- Vibe: {vibe}

Suggest 3 to 5 matching movies.

Your response should be ONLY a valid JSON array with each item like:
{{"title": "Movie Title", "reason": "Why it fits"}}
"#,
        mood = input.mood,
        hobby = input.hobby,
        genre = input.genre,
        vibe = input.vibe,
    )
}
