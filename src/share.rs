//! `mailto:` and `sms:` handoff URIs for forwarding a result.
//!
//! These only build strings; the visitor's own mail or messaging client
//! does the sending.

use crate::error::ShareError;
use crate::models::{AnalysisResult, ShareKind};

pub const EMAIL_SUBJECT: &str = "My Mind Analysis Results";

/// Characters of the summary kept in an SMS body.
pub const SMS_SUMMARY_CHARS: usize = 100;

/// Plain-text rendering of a result, used as the email body.
pub fn share_text(result: &AnalysisResult) -> String {
    let suggestions = result
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Summary: {}\n\nSuggestions:\n{}",
        result.summary, suggestions
    )
}

pub fn build_mailto(address: &str, result: &AnalysisResult) -> Result<String, ShareError> {
    let address = non_empty(address)?;
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(EMAIL_SUBJECT),
        urlencoding::encode(&share_text(result))
    ))
}

pub fn build_sms(number: &str, result: &AnalysisResult) -> Result<String, ShareError> {
    let number = non_empty(number)?;
    let excerpt: String = result.summary.chars().take(SMS_SUMMARY_CHARS).collect();
    let message = format!("My mind analysis: {}...", excerpt);
    Ok(format!("sms:{}?body={}", number, urlencoding::encode(&message)))
}

pub fn build_uri(kind: ShareKind, contact: &str, result: &AnalysisResult) -> Result<String, ShareError> {
    match kind {
        ShareKind::Email => build_mailto(contact, result),
        ShareKind::Text => build_sms(contact, result),
    }
}

fn non_empty(contact: &str) -> Result<&str, ShareError> {
    let trimmed = contact.trim();
    if trimmed.is_empty() {
        Err(ShareError::EmptyContact)
    } else {
        Ok(trimmed)
    }
}
