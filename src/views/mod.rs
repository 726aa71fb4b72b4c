//! Server-rendered HTML for the recommender page.

use std::fmt::Write;

use crate::{
    models::{
        DisplayCard, Genre, MovieDetails, PersonalityForm, HOBBY_CHOICES, MOOD_CHOICES,
        VIBE_CHOICES,
    },
    services::{Notice, Outcome, RecommendationReport},
};

/// What to show underneath the form
#[derive(Debug, Clone)]
pub enum Feedback {
    None,
    /// Blocking validation warning; nothing was submitted upstream
    Warning(String),
    Report(RecommendationReport),
}

const STYLE: &str = r#"
body {
    background-color: #101418;
    color: #F5F5F5;
    font-family: 'Segoe UI', sans-serif;
    max-width: 46rem;
    margin: 0 auto;
    padding: 2rem 1rem;
}
h1, h2, h3, h4 { color: #FF4B4B; }
input, select {
    background-color: #1A1D23;
    color: #F5F5F5;
    border: 1px solid #2D2F35;
    border-radius: 5px;
    padding: 0.4rem;
    width: 100%;
    box-sizing: border-box;
    margin-bottom: 0.6rem;
}
button {
    background-color: #FF4B4B;
    color: #FFFFFF;
    font-weight: bold;
    border: none;
    border-radius: 8px;
    padding: 0.7rem 1.5rem;
    transition: background-color 0.3s ease;
}
button:hover { background-color: #E63946; }
.movie-box {
    background-color: #1E1E1E;
    border-left: 5px solid #FF4B4B;
    padding: 1.5rem;
    border-radius: 10px;
    margin-top: 1.5rem;
    white-space: pre-wrap;
    box-shadow: 0 2px 10px rgba(0,0,0,0.2);
}
.alert { padding: 0.8rem 1rem; border-radius: 6px; margin-top: 1rem; }
.alert.error { background-color: #3E1F24; }
.alert.warning { background-color: #3D3420; }
.alert.info { background-color: #1F2E3D; }
#busy { display: none; margin-top: 1rem; }
form.busy #busy { display: block; }
"#;

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the full page: form (with submitted values echoed) and feedback
pub fn render_page(form: &PersonalityForm, feedback: &Feedback) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>AI Movie Recommender</title>\n<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>🎥 Personality-Based AI Movie Recommender</h1>\n");
    out.push_str(
        "<p>Answer a few personality-based questions and get AI-generated movie recommendations!</p>\n",
    );

    render_form(&mut out, form);

    match feedback {
        Feedback::None => {}
        Feedback::Warning(message) => alert(&mut out, "warning", message),
        Feedback::Report(report) => render_report(&mut out, report),
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_form(out: &mut String, form: &PersonalityForm) {
    out.push_str(
        "<form method=\"post\" action=\"/\" onsubmit=\"this.classList.add('busy')\">\n",
    );
    out.push_str("<h3>💬 Tell us about yourself</h3>\n");

    text_with_fallback(
        out,
        ("mood", "Describe your current mood:", "e.g., adventurous, nostalgic"),
        &form.mood,
        ("mood_choice", "Or pick a mood:"),
        &MOOD_CHOICES,
        &form.mood_choice,
    );
    text_with_fallback(
        out,
        ("hobby", "One hobby you love:", "e.g., painting, hiking"),
        &form.hobby,
        ("hobby_choice", "Or choose a hobby:"),
        &HOBBY_CHOICES,
        &form.hobby_choice,
    );

    out.push_str("<label for=\"genre\">Preferred Genre</label>\n<select id=\"genre\" name=\"genre\">\n");
    for genre in Genre::ALL {
        option(out, genre.label(), genre == form.genre);
    }
    out.push_str("</select>\n");

    text_with_fallback(
        out,
        ("vibe", "Pick one word that describes your vibe:", "e.g., bold, chill, curious"),
        &form.vibe,
        ("vibe_choice", "Or select a vibe:"),
        &VIBE_CHOICES,
        &form.vibe_choice,
    );

    out.push_str("<button type=\"submit\">🎬 Recommend Movies</button>\n");
    out.push_str("<p id=\"busy\">✨ AI is generating recommendations...</p>\n");
    out.push_str("</form>\n");
}

fn text_with_fallback(
    out: &mut String,
    (name, label, placeholder): (&str, &str, &str),
    value: &str,
    (choice_name, choice_label): (&str, &str),
    choices: &[&str],
    selected: &str,
) {
    let _ = write!(
        out,
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" placeholder=\"{placeholder}\" value=\"{value}\">\n\
         <label for=\"{choice_name}\">{choice_label}</label>\n\
         <select id=\"{choice_name}\" name=\"{choice_name}\">\n",
        value = escape_html(value),
    );
    option(out, "", selected.is_empty());
    for choice in choices {
        option(out, choice, *choice == selected);
    }
    out.push_str("</select>\n");
}

fn option(out: &mut String, value: &str, selected: bool) {
    let value = escape_html(value);
    let _ = writeln!(
        out,
        "<option value=\"{value}\"{}>{value}</option>",
        if selected { " selected" } else { "" }
    );
}

fn alert(out: &mut String, kind: &str, message: &str) {
    let _ = writeln!(
        out,
        "<div class=\"alert {kind}\">{}</div>",
        escape_html(message)
    );
}

fn raw_output(out: &mut String, raw: &str, reason: Option<&str>) {
    out.push_str("<details>\n<summary>📄 Show raw AI output</summary>\n");
    if let Some(reason) = reason {
        let _ = writeln!(
            out,
            "<p><strong>Decode error:</strong> {}</p>",
            escape_html(reason)
        );
    }
    let _ = writeln!(out, "<pre><code>{}</code></pre>\n</details>", escape_html(raw));
}

fn render_report(out: &mut String, report: &RecommendationReport) {
    for notice in &report.notices {
        match notice {
            Notice::ModelUnavailable(message) => {
                alert(out, "error", &format!("❌ Hugging Face API Error: {}", message))
            }
            Notice::MetadataUnavailable { title, message } => alert(
                out,
                "error",
                &format!("OMDb fetch error for \"{}\": {}", title, message),
            ),
        }
    }

    match &report.outcome {
        Outcome::Unparseable { raw } => {
            alert(out, "error", "❌ The AI response couldn't be parsed.");
            raw_output(out, raw, None);
        }
        Outcome::Malformed { raw, reason } => {
            alert(
                out,
                "error",
                "❌ The AI response looked like JSON but couldn't be decoded.",
            );
            raw_output(out, raw, Some(reason.as_str()));
        }
        Outcome::Empty => alert(
            out,
            "warning",
            "The AI response was empty. Try refining your inputs.",
        ),
        Outcome::Cards(cards) => {
            out.push_str("<h3>🎞️ Your AI Movie Recommendations</h3>\n");
            for card in cards {
                render_card(out, card);
            }
        }
    }
}

fn render_card(out: &mut String, card: &DisplayCard) {
    let suggestion = &card.suggestion;
    match &card.details {
        Some(details) => movie_box(out, details, &suggestion.reason),
        None => alert(
            out,
            "info",
            &format!(
                "🎞️ {}: {} (❌ Not found in OMDb)",
                suggestion.title, suggestion.reason
            ),
        ),
    }
}

fn movie_box(out: &mut String, details: &MovieDetails, reason: &str) {
    let _ = write!(
        out,
        "<div class=\"movie-box\">\n\
         <h4>{} ({})</h4>\n\
         <p><strong>Director:</strong> {}</p>\n\
         <p><strong>AI's Reason:</strong> {}</p>\n\
         <p><strong>Summary:</strong> {}</p>\n",
        escape_html(&details.title),
        escape_html(&details.year),
        escape_html(&details.director),
        escape_html(reason),
        escape_html(&details.plot),
    );
    if let Some(poster) = &details.poster {
        let _ = writeln!(
            out,
            "<img src=\"{}\" width=\"180\" alt=\"{} poster\">",
            escape_html(poster),
            escape_html(&details.title)
        );
    }
    out.push_str("</div>\n");
}
