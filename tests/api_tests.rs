use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use moodreel::{
    api::{create_router, AppState},
    error::{AppError, AppResult},
    middleware::request_id::REQUEST_ID_HEADER,
    models::MovieDetails,
    services::providers::{LanguageModel, MovieDatabase},
};

struct FakeModel {
    output: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl LanguageModel for FakeModel {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.output
            .map(str::to_string)
            .ok_or_else(|| AppError::ExternalApi("model is loading".to_string()))
    }

    fn name(&self) -> &'static str {
        "fake-model"
    }
}

/// Knows a fixed set of titles and records every lookup in order
struct FakeMovieDb {
    known: Vec<&'static str>,
    lookups: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl MovieDatabase for FakeMovieDb {
    async fn lookup_title(&self, title: &str) -> AppResult<Option<MovieDetails>> {
        self.lookups.lock().unwrap().push(title.to_string());
        Ok(self.known.iter().any(|k| *k == title).then(|| MovieDetails {
            title: title.to_string(),
            year: "1999".to_string(),
            plot: "A plot.".to_string(),
            poster: Some(format!("https://img.example/{}.jpg", title.len())),
            director: "A. Director".to_string(),
        }))
    }

    fn name(&self) -> &'static str {
        "fake-db"
    }
}

struct Harness {
    app: Router,
    model_calls: Arc<AtomicUsize>,
    lookups: Arc<Mutex<Vec<String>>>,
}

fn harness(output: Option<&'static str>, known: Vec<&'static str>) -> Harness {
    let model_calls = Arc::new(AtomicUsize::new(0));
    let lookups = Arc::new(Mutex::new(Vec::new()));
    let state = AppState::new(
        Arc::new(FakeModel {
            output,
            calls: model_calls.clone(),
        }),
        Arc::new(FakeMovieDb {
            known,
            lookups: lookups.clone(),
        }),
    );

    Harness {
        app: create_router(state),
        model_calls,
        lookups,
    }
}

fn submission(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const FULL_FORM: &str = "mood=adventurous&hobby=hiking&genre=Sci-Fi&vibe=bold";

#[tokio::test]
async fn test_health_check() {
    let h = harness(Some("[]"), vec![]);
    let response = h
        .app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert!(body_text(response).await.contains("healthy"));
}

#[tokio::test]
async fn test_form_page_renders() {
    let h = harness(Some("[]"), vec![]);
    let response = h
        .app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<form method=\"post\""));
    assert!(html.contains("name=\"mood_choice\""));
    assert!(html.contains("<option value=\"Fantasy\">Fantasy</option>"));
}

#[tokio::test]
async fn test_incomplete_submissions_make_no_upstream_calls() {
    let bodies = [
        "",
        "genre=Drama",
        "hobby=hiking&vibe=bold",
        "mood=calm&vibe=bold",
        "mood=calm&hobby=hiking",
        "mood=calm&hobby=%20%20&hobby_choice=&vibe=bold",
    ];

    for body in bodies {
        let h = harness(Some("[]"), vec![]);
        let response = h.app.oneshot(submission(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let html = body_text(response).await;
        assert!(html.contains("Please fill in all the fields or pick from the dropdowns."));
        assert_eq!(h.model_calls.load(Ordering::SeqCst), 0);
        assert!(h.lookups.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_fallback_choices_satisfy_validation() {
    let h = harness(Some("[]"), vec![]);
    let response = h
        .app
        .oneshot(submission(
            "mood=&mood_choice=Calm&hobby_choice=Gaming&genre=Comedy&vibe_choice=Quirky",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(h.model_calls.load(Ordering::SeqCst), 1);
    assert!(body_text(response).await.contains("The AI response was empty"));
}

#[tokio::test]
async fn test_full_flow_renders_cards_in_order() {
    let output = r#"Absolutely! Here are some picks:
[
  {"title": "Arrival", "reason": "Thoughtful first contact"},
  {"title": "Unreleased Thing", "reason": "Hidden gem"},
  {"title": "", "reason": "dropped"},
  {"title": "Interstellar", "reason": "Epic & emotional"}
]
Enjoy the show!"#;
    let h = harness(Some(output), vec!["Arrival", "Interstellar"]);

    let response = h.app.oneshot(submission(FULL_FORM)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert_eq!(
        *h.lookups.lock().unwrap(),
        vec!["Arrival", "Unreleased Thing", "Interstellar"]
    );

    let arrival = html.find("<h4>Arrival (1999)</h4>").unwrap();
    let missing = html.find("Unreleased Thing: Hidden gem (❌ Not found in OMDb)").unwrap();
    let interstellar = html.find("<h4>Interstellar (1999)</h4>").unwrap();
    assert!(arrival < missing && missing < interstellar);
    assert!(html.contains("Epic &amp; emotional"));
    assert_eq!(html.matches("<div class=\"movie-box\">").count(), 2);

    // submitted values are echoed back into the form
    assert!(html.contains("value=\"adventurous\""));
    assert!(html.contains("<option value=\"Sci-Fi\" selected>"));
}

#[tokio::test]
async fn test_prose_only_output_is_unparseable() {
    let h = harness(Some("I think you would love Heat."), vec!["Heat"]);

    let response = h.app.oneshot(submission(FULL_FORM)).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("couldn&#x27;t be parsed"));
    assert!(html.contains("I think you would love Heat."));
    assert!(h.lookups.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_output_shows_raw_text() {
    let h = harness(Some("[{title: Heat}]"), vec!["Heat"]);

    let response = h.app.oneshot(submission(FULL_FORM)).await.unwrap();
    let html = body_text(response).await;

    assert!(html.contains("looked like JSON but couldn&#x27;t be decoded"));
    assert!(html.contains("<code>[{title: Heat}]</code>"));
    assert!(h.lookups.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_model_failure_reported_inline() {
    let h = harness(None, vec![]);

    let response = h.app.oneshot(submission(FULL_FORM)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert_eq!(h.model_calls.load(Ordering::SeqCst), 1);
    assert!(html.contains("Hugging Face API Error"));
    assert!(html.contains("model is loading"));
    assert!(html.contains("couldn&#x27;t be parsed"));
}

#[tokio::test]
async fn test_incoming_request_id_echoed() {
    let h = harness(Some("[]"), vec![]);
    let id = "6f1c1c3e-2b4e-4f8e-9a53-0d2d6a0f4b11";
    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, id)
        .body(Body::empty())
        .unwrap();

    let response = h.app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[REQUEST_ID_HEADER], id);
}
