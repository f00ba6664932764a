//! End-to-end workflow tests against the router, with a fake analyzer.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use mind_dump::{
    app, fallback_result, AnalysisError, AnalysisResult, Analyzer, AppState, FakeAnalyzer,
    PlaceholderRotator, PLACEHOLDERS,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

// ============================================================================
// Helpers
// ============================================================================

fn test_state(analyzer: impl Analyzer + 'static) -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(analyzer),
        PlaceholderRotator::new(Duration::from_secs(3)),
    ))
}

fn test_app(analyzer: impl Analyzer + 'static) -> Router {
    app(test_state(analyzer))
}

fn canned_result() -> AnalysisResult {
    AnalysisResult {
        summary: "Work and sleep are both weighing on you.".to_string(),
        suggestions: vec![
            "Protect an hour before bed".to_string(),
            "List the work items you can drop".to_string(),
        ],
    }
}

struct Client {
    app: Router,
    cookie: Option<String>,
}

struct Page {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

impl Client {
    fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    async fn send(&mut self, request: Request<Body>) -> Page {
        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        Page {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn get(&mut self, uri: &str) -> Page {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_form(&mut self, uri: &str, form: &str) -> Page {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn submit(&mut self, text: &str) -> Page {
        let form = format!("text={}", urlencoding::encode(text));
        self.post_form("/notes", &form).await
    }

    /// Poll the index until the result page shows up.
    async fn wait_for_result(&mut self) -> Page {
        for _ in 0..100 {
            let page = self.get("/").await;
            if page.body.contains("Here&#39;s what I found") {
                return page;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("analysis never completed");
    }
}

// ============================================================================
// Capture
// ============================================================================

#[tokio::test]
async fn test_first_visit_composes_without_session() {
    let state = test_state(FakeAnalyzer::succeeding(canned_result()));
    let mut client = Client::new(app(Arc::clone(&state)));
    let page = client.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(client.cookie.is_none());
    assert!(state.sessions.is_empty());
    assert!(page.body.contains("Let's Organize"));
    assert!(page.body.contains("Send to void"));
    assert!(!page.body.contains("action=\"/analyze\""));
    let hint = PLACEHOLDERS[0].replace('\'', "&#39;");
    assert!(page.body.contains(&hint));
}

#[tokio::test]
async fn test_page_views_do_not_allocate_sessions() {
    let state = test_state(FakeAnalyzer::succeeding(canned_result()));
    for _ in 0..5 {
        let mut crawler = Client::new(app(Arc::clone(&state)));
        crawler.get("/").await;
        crawler.get("/share/email").await;
    }
    assert!(state.sessions.is_empty());

    let mut client = Client::new(app(Arc::clone(&state)));
    client.submit("a thought").await;
    assert!(client.cookie.as_deref().unwrap().starts_with("mind_dump_session="));
    assert_eq!(state.sessions.len(), 1);
    assert!(client.get("/").await.body.contains("1 thought captured"));
}

#[tokio::test]
async fn test_submit_counts_notes_and_ignores_blank() {
    let mut client = Client::new(test_app(FakeAnalyzer::succeeding(canned_result())));
    client.get("/").await;

    let page = client.submit("I'm stressed about work").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/"));

    let page = client.get("/").await;
    assert!(page.body.contains("1 thought captured"));
    assert!(page.body.contains("sticky-note captured"));

    client.submit("   ").await;
    client.submit("I haven't slept well").await;
    let page = client.get("/").await;
    assert!(page.body.contains("2 thoughts captured"));
    assert!(page.body.contains("action=\"/analyze\""));
}

#[tokio::test]
async fn test_analyze_without_notes_is_noop() {
    let mut client = Client::new(test_app(FakeAnalyzer::succeeding(canned_result())));
    client.get("/").await;

    let page = client.post_form("/analyze", "").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);

    let page = client.get("/").await;
    assert!(page.body.contains("Send to void"));
    assert!(!page.body.contains("Processing your thoughts"));
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn test_network_failure_shows_fallback() {
    let fake = FakeAnalyzer::failing(AnalysisError::Network("connection refused".to_string()))
        .with_delay(Duration::from_millis(50));
    let mut client = Client::new(test_app(fake));
    client.get("/").await;

    client.submit("I'm stressed about work").await;
    client.submit("I haven't slept well").await;
    client.post_form("/analyze", "").await;

    let page = client.get("/").await;
    assert!(page.body.contains("Processing your thoughts..."));

    let page = client.wait_for_result().await;
    assert!(page.body.contains("taking the time to write them down"));
    for suggestion in fallback_result().suggestions {
        let escaped = suggestion.replace('\'', "&#39;");
        assert!(page.body.contains(&escaped), "missing {}", suggestion);
    }
    assert!(!page.body.contains("error"));
}

#[tokio::test]
async fn test_success_shows_result_then_reset() {
    let mut client = Client::new(test_app(FakeAnalyzer::succeeding(canned_result())));
    client.get("/").await;
    client.submit("a thought").await;
    client.post_form("/analyze", "").await;

    let page = client.wait_for_result().await;
    assert!(page.body.contains("Work and sleep are both weighing on you."));
    assert!(page.body.contains("Protect an hour before bed"));

    client.post_form("/reset", "").await;
    let page = client.get("/").await;
    assert!(page.body.contains("Send to void"));
    assert!(!page.body.contains("thought captured"));
    assert!(!page.body.contains("thoughts captured"));
}

#[tokio::test]
async fn test_reset_while_processing_discards_result() {
    let fake = FakeAnalyzer::succeeding(canned_result()).with_delay(Duration::from_millis(100));
    let mut client = Client::new(test_app(fake));
    client.get("/").await;
    client.submit("a thought").await;
    client.post_form("/analyze", "").await;
    client.post_form("/reset", "").await;

    tokio::time::sleep(Duration::from_millis(250)).await;
    let page = client.get("/").await;
    assert!(page.body.contains("Send to void"));
    assert!(!page.body.contains("Here&#39;s what I found"));
}

#[tokio::test]
async fn test_second_analyze_while_processing_is_ignored() {
    let fake = FakeAnalyzer::succeeding(canned_result()).with_delay(Duration::from_millis(100));
    let mut client = Client::new(test_app(fake.clone()));
    client.submit("a thought").await;

    client.post_form("/analyze", "").await;
    let page = client.post_form("/analyze", "").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert!(client.get("/").await.body.contains("Processing your thoughts..."));

    let page = client.wait_for_result().await;
    assert!(page.body.contains("Work and sleep are both weighing on you."));
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn test_sessions_do_not_share_notes() {
    let app = test_app(FakeAnalyzer::succeeding(canned_result()));
    let mut alice = Client::new(app.clone());
    let mut bob = Client::new(app);

    alice.get("/").await;
    bob.get("/").await;
    alice.submit("alice's note").await;

    assert!(alice.get("/").await.body.contains("1 thought captured"));
    assert!(!bob.get("/").await.body.contains("thought captured"));
}

// ============================================================================
// Sharing
// ============================================================================

#[tokio::test]
async fn test_share_email_flow() {
    let mut client = Client::new(test_app(FakeAnalyzer::succeeding(canned_result())));
    client.get("/").await;
    client.submit("a thought").await;
    client.post_form("/analyze", "").await;
    client.wait_for_result().await;

    let page = client.get("/share/email").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    let page = client.get("/").await;
    assert!(page.body.contains("Email to yourself"));

    // Blank contact keeps the dialog open
    let page = client.post_form("/share", "contact=+++").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert!(client.get("/").await.body.contains("Email to yourself"));

    let page = client.post_form("/share", "contact=me%40example.com").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page
        .body
        .contains("mailto:me@example.com?subject=My%20Mind%20Analysis%20Results&amp;body="));

    let page = client.get("/").await;
    assert!(page.body.contains("Here&#39;s what I found"));
    assert!(!page.body.contains("modal-overlay"));
}

#[tokio::test]
async fn test_share_text_cancel() {
    let mut client = Client::new(test_app(FakeAnalyzer::succeeding(canned_result())));
    client.get("/").await;
    client.submit("a thought").await;
    client.post_form("/analyze", "").await;
    client.wait_for_result().await;

    client.get("/share/text").await;
    assert!(client.get("/").await.body.contains("Text to yourself"));

    client.post_form("/share/cancel", "").await;
    assert!(!client.get("/").await.body.contains("modal-overlay"));
}

#[tokio::test]
async fn test_share_unavailable_while_composing() {
    let mut client = Client::new(test_app(FakeAnalyzer::succeeding(canned_result())));
    client.get("/").await;
    client.get("/share/email").await;
    assert!(!client.get("/").await.body.contains("modal-overlay"));

    let page = client.post_form("/share", "contact=me%40example.com").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
}

// ============================================================================
// Relay API
// ============================================================================

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_api_analyze_success() {
    let app = test_app(FakeAnalyzer::succeeding(canned_result()));
    let (status, json) = post_json(app, "/api/analyze", r#"{"notes": ["a", "b"]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"], "Work and sleep are both weighing on you.");
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_api_analyze_failure_returns_fallback() {
    let app = test_app(FakeAnalyzer::failing(AnalysisError::BadStatus(500)));
    let (status, json) = post_json(app, "/api/analyze", r#"{"notes": ["a"]}"#).await;

    assert_eq!(status, StatusCode::OK);
    let result: AnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(result, fallback_result());
}

#[tokio::test]
async fn test_api_analyze_rejects_empty() {
    let app = test_app(FakeAnalyzer::succeeding(canned_result()));
    let (status, json) = post_json(app, "/api/analyze", r#"{"notes": ["  ", ""]}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "EMPTY_NOTES");
}
