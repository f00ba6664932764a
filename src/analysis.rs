//! Analysis of captured notes via an external text-generation endpoint.
//!
//! This module handles:
//! - Building the prompt from the captured notes
//! - Calling the endpoint (one request, no retry, no streaming)
//! - Converting every failure into the fixed fallback result

use crate::config::Config;
use crate::error::AnalysisError;
use crate::extract::parse_analysis;
use crate::models::{
    AnalysisResult, ChatMessage, MessagesRequest, MessagesResponse, NonEmptyNotes,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// ============================================================================
// Fallback
// ============================================================================

pub const FALLBACK_SUMMARY: &str = "I can see you've shared some important thoughts with me. While I couldn't process them fully right now, taking the time to write them down was already a valuable step in understanding what's on your mind.";

pub const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Consider revisiting these thoughts when you have a quiet moment",
    "Try talking to someone you trust about what's been weighing on you",
    "Remember that it's normal to have complex feelings and concerns",
    "Be kind to yourself as you work through these thoughts",
];

pub fn fallback_result() -> AnalysisResult {
    AnalysisResult {
        summary: FALLBACK_SUMMARY.to_string(),
        suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

// ============================================================================
// Prompt
// ============================================================================

pub fn build_prompt(notes: &NonEmptyNotes) -> String {
    let numbered = notes
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {}", i + 1, note))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "I've been writing down my thoughts and concerns. Please analyze these notes and provide:\n\
        1. A compassionate summary of what seems to be on my mind\n\
        2. 3-5 focused, actionable suggestions to help me feel better or address these concerns\n\
        3. Keep the tone warm, supportive, and non-judgmental\n\n\
        Here are my thoughts:\n\
        {}\n\n\
        Please format your response as JSON with two fields: \"summary\" and \"suggestions\" (array of strings).",
        numbered
    )
}

// ============================================================================
// Analyzer Trait
// ============================================================================

/// Turns a list of notes into an analysis, or reports why it could not.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn request(&self, notes: &NonEmptyNotes) -> Result<AnalysisResult, AnalysisError>;
}

/// Run one analysis. Never fails: any error yields `fallback_result()`.
pub async fn analyze(analyzer: &dyn Analyzer, notes: &NonEmptyNotes) -> AnalysisResult {
    match analyzer.request(notes).await {
        Ok(result) => {
            tracing::info!(
                notes = notes.len(),
                suggestions = result.suggestions.len(),
                "analysis completed"
            );
            result
        }
        Err(e) => {
            tracing::warn!(notes = notes.len(), error = %e, "analysis failed, using fallback");
            fallback_result()
        }
    }
}

// ============================================================================
// Anthropic Messages API
// ============================================================================

pub struct AnthropicAnalyzer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicAnalyzer {
    pub fn new(config: &Config) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/v1/messages", config.api_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl Analyzer for AnthropicAnalyzer {
    async fn request(&self, notes: &NonEmptyNotes) -> Result<AnalysisResult, AnalysisError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(notes),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::BadStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: MessagesResponse = serde_json::from_str(&text)?;

        // The completion lives in the first text block
        let completion = parsed
            .content
            .into_iter()
            .find(|block| block.block_type.as_deref() == Some("text"))
            .and_then(|block| block.text)
            .ok_or_else(|| AnalysisError::MalformedResponse("no completion text".to_string()))?;

        parse_analysis(&completion)
    }
}

// ============================================================================
// Fake Analyzer
// ============================================================================

/// A stand-in analyzer with a fixed outcome, for tests.
#[derive(Debug, Clone)]
pub struct FakeAnalyzer {
    outcome: Result<AnalysisResult, AnalysisError>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl FakeAnalyzer {
    pub fn succeeding(result: AnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: AnalysisError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer as if the endpoint had returned `completion` as generated text.
    pub fn from_completion(completion: &str) -> Self {
        Self {
            outcome: parse_analysis(completion),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests made so far, shared between clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for FakeAnalyzer {
    async fn request(&self, _notes: &NonEmptyNotes) -> Result<AnalysisResult, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
