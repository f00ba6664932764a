//! Data models for the mind dump application.
//!
//! This module contains the core data structures used throughout the application:
//! captured notes, analysis results, share targets, and the wire types spoken
//! with the text-generation endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Notes
// ============================================================================

/// One captured thought. Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    /// Trim the raw input and wrap it, or `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered list of notes holding at least one entry.
///
/// Analysis only ever receives this type, so an empty note list cannot reach
/// the external endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyNotes(Vec<Note>);

impl NonEmptyNotes {
    pub fn new(notes: Vec<Note>) -> Option<Self> {
        if notes.is_empty() {
            None
        } else {
            Some(Self(notes))
        }
    }

    /// Build from raw strings, dropping blank entries.
    pub fn from_raw<I, S>(raw: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(raw.into_iter().filter_map(|s| Note::new(s.as_ref())).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ============================================================================
// Analysis Result
// ============================================================================

/// Summary plus suggestions produced by one analysis.
///
/// `suggestions` is the canonical field name. `insights` is accepted on input
/// because one prompt variant asked for it. A payload carrying both names is
/// a duplicate-field error, which callers treat like any other parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    #[serde(alias = "insights")]
    pub suggestions: Vec<String>,
}

// ============================================================================
// Sharing
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
    Email,
    Text,
}

impl ShareKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShareKind::Email => "email",
            ShareKind::Text => "text",
        }
    }
}

impl FromStr for ShareKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ShareKind::Email),
            "text" => Ok(ShareKind::Text),
            other => Err(format!("unknown share kind: {}", other)),
        }
    }
}

/// The contact-capture dialog shown over the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDialog {
    pub kind: ShareKind,
    pub contact: String,
}

// ============================================================================
// Text Generation Wire Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// Only blocks of type `text` carry a completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// Relay API Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub notes: Vec<String>,
}
