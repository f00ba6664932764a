//! HTTP route handlers for the web application.
//!
//! Page handlers follow post/redirect/get: every form posts a workflow
//! transition and redirects back to `/`, which renders the current phase.
//! Refused transitions are silent no-ops so no technical error reaches the page.

use crate::analysis::analyze;
use crate::error::ApiError;
use crate::models::{AnalysisResult, AnalyzeRequest, NonEmptyNotes, ShareKind};
use crate::sessions::SESSION_COOKIE;
use crate::templates::{render_handoff, render_page};
use crate::workflow::Workflow;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

// ============================================================================
// Session Resolution
// ============================================================================

/// The visitor's session id, if the cookie names a live session.
fn existing_session(state: &AppState, jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| state.sessions.contains(id))
}

/// Find the visitor's session id, issuing a new cookie if it is missing or unknown.
/// Only state-changing requests call this, so page views never allocate a session.
fn resolve_session(state: &AppState, jar: CookieJar) -> (String, CookieJar) {
    if let Some(id) = existing_session(state, &jar) {
        return (id, jar);
    }

    let id = state.sessions.create(Utc::now());
    tracing::debug!("new session");
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (id, jar.add(cookie))
}

// ============================================================================
// Page Handlers
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>, jar: CookieJar) -> Html<String> {
    let now = Utc::now();
    let placeholder = state.placeholders.current();

    let html = match existing_session(&state, &jar) {
        Some(id) => state.sessions.with(&id, now, |wf| {
            let captured = wf.take_capture_flash(now);
            render_page(wf, placeholder, captured)
        }),
        None => render_page(&Workflow::new(), placeholder, false),
    };

    Html(html)
}

#[derive(Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub text: String,
}

pub async fn submit_note(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<NoteForm>,
) -> Response {
    let (id, jar) = resolve_session(&state, jar);
    let now = Utc::now();

    match state.sessions.with(&id, now, |wf| wf.submit(&form.text, now)) {
        Ok(true) => tracing::debug!("note captured"),
        Ok(false) => tracing::debug!("blank note ignored"),
        Err(e) => tracing::debug!(error = %e, "note refused"),
    }

    (jar, Redirect::to("/")).into_response()
}

pub async fn start_analysis(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (id, jar) = resolve_session(&state, jar);

    match state.sessions.with(&id, Utc::now(), |wf| wf.begin_analysis()) {
        Ok((cycle, notes)) => {
            tracing::info!(notes = notes.len(), cycle, "analysis started");
            tokio::spawn(run_analysis(Arc::clone(&state), id, cycle, notes));
        }
        Err(e) => tracing::debug!(error = %e, "analysis not started"),
    }

    (jar, Redirect::to("/")).into_response()
}

/// Perform one analysis and hand the result to the session, if still wanted.
async fn run_analysis(state: Arc<AppState>, id: String, cycle: u64, notes: NonEmptyNotes) {
    let result = analyze(state.analyzer.as_ref(), &notes).await;

    let applied = state
        .sessions
        .with_existing(&id, |wf| wf.complete_analysis(cycle, result))
        .unwrap_or(false);

    if !applied {
        tracing::debug!(cycle, "discarding stale analysis result");
    }
}

pub async fn reset(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (id, jar) = resolve_session(&state, jar);
    state.sessions.with(&id, Utc::now(), |wf| wf.reset());
    (jar, Redirect::to("/")).into_response()
}

// ============================================================================
// Share Handlers
// ============================================================================

pub async fn open_share(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(kind): Path<String>,
) -> Redirect {
    let Some(id) = existing_session(&state, &jar) else {
        return Redirect::to("/");
    };

    if let Ok(kind) = kind.parse::<ShareKind>() {
        if let Err(e) = state.sessions.with(&id, Utc::now(), |wf| wf.open_share(kind)) {
            tracing::debug!(error = %e, "share dialog not opened");
        }
    }

    Redirect::to("/")
}

#[derive(Deserialize)]
pub struct ShareForm {
    #[serde(default)]
    pub contact: String,
}

pub async fn confirm_share(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<ShareForm>,
) -> Response {
    let (id, jar) = resolve_session(&state, jar);

    match state
        .sessions
        .with(&id, Utc::now(), |wf| wf.confirm_share(&form.contact))
    {
        Ok(uri) => (jar, Html(render_handoff(&uri))).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "share not sent");
            (jar, Redirect::to("/")).into_response()
        }
    }
}

pub async fn cancel_share(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (id, jar) = resolve_session(&state, jar);
    state.sessions.with(&id, Utc::now(), |wf| wf.cancel_share());
    (jar, Redirect::to("/")).into_response()
}

// ============================================================================
// Relay API
// ============================================================================

/// Analyze a list of notes for script clients. Always answers with a result
/// (the fallback on failure); only an empty list is rejected.
pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let notes = NonEmptyNotes::from_raw(&body.notes).ok_or(ApiError::EmptyNotes)?;
    Ok(Json(analyze(state.analyzer.as_ref(), &notes).await))
}

pub async fn health() -> &'static str {
    "ok"
}
