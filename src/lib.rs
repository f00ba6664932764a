//! Mind dump library - re-exports for testing and external use.
//!
//! A visitor jots down short notes, then asks for them to be analyzed. The
//! server relays the notes to a text-generation API (holding the credential
//! itself), extracts a summary and suggestions, and offers to forward the
//! result through the visitor's own mail or SMS client.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod placeholder;
pub mod sessions;
pub mod share;
pub mod templates;
pub mod workflow;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub sessions: SessionStore,
    pub analyzer: Arc<dyn Analyzer>,
    pub placeholders: PlaceholderRotator,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn Analyzer>, placeholders: PlaceholderRotator) -> Self {
        Self {
            sessions: SessionStore::new(),
            analyzer,
            placeholders,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Workflow pages
        .route("/", get(handlers::index))
        .route("/notes", post(handlers::submit_note))
        .route("/analyze", post(handlers::start_analysis))
        .route("/reset", post(handlers::reset))
        // Share dialog
        .route("/share", post(handlers::confirm_share))
        .route("/share/cancel", post(handlers::cancel_share))
        .route("/share/{kind}", get(handlers::open_share))
        // Relay API
        .route("/api/analyze", post(handlers::api_analyze))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use analysis::{
    analyze, build_prompt, fallback_result, AnthropicAnalyzer, Analyzer, FakeAnalyzer,
    FALLBACK_SUGGESTIONS, FALLBACK_SUMMARY,
};
pub use config::Config;
pub use error::{AnalysisError, ApiError, ConfigError, ShareError, WorkflowError};
pub use extract::{parse_analysis, strip_fences};
pub use models::{AnalysisResult, NonEmptyNotes, Note, ShareDialog, ShareKind};
pub use placeholder::{PlaceholderRotator, PLACEHOLDERS};
pub use sessions::{SessionStore, SESSION_COOKIE, SESSION_TTL_HOURS};
pub use share::{build_mailto, build_sms, share_text};
pub use workflow::{Phase, Workflow};
