use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Extension, Form, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppError,
    middleware::request_id::RequestId,
    models::PersonalityForm,
    services::{self, Outcome},
    views::{render_page, Feedback},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Serves the empty form
pub async fn form_page() -> Html<String> {
    Html(render_page(&PersonalityForm::default(), &Feedback::None))
}

/// Handles a form submission
///
/// Invalid input is answered with the form and a warning before any upstream
/// call. Otherwise the full pipeline runs and its report is rendered.
pub async fn submit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(form): Form<PersonalityForm>,
) -> (StatusCode, Html<String>) {
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Rejected incomplete submission");
            let feedback = Feedback::Warning(match &e {
                AppError::InvalidInput(message) => message.clone(),
                other => other.to_string(),
            });
            return (e.status_code(), Html(render_page(&form, &feedback)));
        }
    };

    tracing::info!(
        request_id = %request_id,
        mood = %input.mood,
        hobby = %input.hobby,
        genre = %input.genre,
        vibe = %input.vibe,
        "Processing recommendation request"
    );

    let report =
        services::recommend(state.language_model.as_ref(), state.movie_db.as_ref(), &input).await;

    let outcome = match &report.outcome {
        Outcome::Cards(cards) => format!("{} cards", cards.len()),
        Outcome::Empty => "empty".to_string(),
        Outcome::Unparseable { .. } => "unparseable".to_string(),
        Outcome::Malformed { .. } => "malformed".to_string(),
    };
    tracing::info!(
        request_id = %request_id,
        outcome = %outcome,
        notices = report.notices.len(),
        "Recommendation request completed"
    );

    (StatusCode::OK, Html(render_page(&form, &Feedback::Report(report))))
}
