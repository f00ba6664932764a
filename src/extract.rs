//! Extraction of the structured result from generated text.
//!
//! Models tend to wrap JSON in markdown code fences, so fences are removed
//! before the remainder is parsed. There is no partial success: either a
//! complete `AnalysisResult` comes out, or `MalformedResponse`.

use crate::error::AnalysisError;
use crate::models::AnalysisResult;
use regex::Regex;

/// A fence marker, its optional language tag, and the newline after it.
const FENCE_PATTERN: &str = r"```[A-Za-z0-9_+.-]*[ \t]*\r?\n?";

/// Remove every code fence marker and trim the remainder.
pub fn strip_fences(raw: &str) -> String {
    match Regex::new(FENCE_PATTERN) {
        Ok(re) => re.replace_all(raw, "").trim().to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

/// Parse generated text into an `AnalysisResult`.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let cleaned = strip_fences(raw);
    if cleaned.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "empty completion".to_string(),
        ));
    }

    let parsed: AnalysisResult = serde_json::from_str(&cleaned)?;

    if parsed.summary.trim().is_empty() {
        return Err(AnalysisError::MalformedResponse("blank summary".to_string()));
    }
    if parsed.suggestions.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "no suggestions".to_string(),
        ));
    }
    if parsed.suggestions.iter().any(|s| s.trim().is_empty()) {
        return Err(AnalysisError::MalformedResponse(
            "blank suggestion".to_string(),
        ));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_json_tag() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fences_bare_and_surrounding_whitespace() {
        let raw = "\n\n```\n{\"a\": 1}\n```\n  ";
        assert_eq!(strip_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fences_no_fence() {
        assert_eq!(strip_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_fenced_result() {
        let raw = "```json\n{\"summary\": \"S\", \"suggestions\": [\"s1\", \"s2\"]}\n```";
        let result = parse_analysis(raw).unwrap();
        assert_eq!(
            result,
            AnalysisResult {
                summary: "S".to_string(),
                suggestions: vec!["s1".to_string(), "s2".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_insights_variant() {
        let raw = "{\"summary\": \"S\", \"insights\": [\"i1\"]}";
        let result = parse_analysis(raw).unwrap();
        assert_eq!(result.suggestions, vec!["i1"]);
    }

    #[test]
    fn test_parse_rejects_prose() {
        let err = parse_analysis("Sure! Here is your summary: you are tired.").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_analysis("{\"summary\": \"S\"}").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = parse_analysis("{\"summary\": \"S\", \"suggestions\": \"just one\"}").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_blank_summary_and_empty_list() {
        assert!(parse_analysis("{\"summary\": \"  \", \"suggestions\": [\"a\"]}").is_err());
        assert!(parse_analysis("{\"summary\": \"S\", \"suggestions\": []}").is_err());
        assert!(parse_analysis("{\"summary\": \"S\", \"suggestions\": [\" \"]}").is_err());
    }

    #[test]
    fn test_parse_rejects_any_blank_suggestion() {
        let raw = "```json\n{\"summary\": \"S\", \"suggestions\": [\" s1\", \"\", \"s2 \"]}\n```";
        let err = parse_analysis(raw).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MalformedResponse("blank suggestion".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_values_verbatim() {
        let raw = "{\"summary\": \" S \", \"suggestions\": [\" s1\", \"s2 \"]}";
        let result = parse_analysis(raw).unwrap();
        assert_eq!(
            result,
            AnalysisResult {
                summary: " S ".to_string(),
                suggestions: vec![" s1".to_string(), "s2 ".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_rejects_both_field_names() {
        let raw = "{\"summary\": \"S\", \"suggestions\": [\"a\"], \"insights\": [\"b\"]}";
        let err = parse_analysis(raw).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_empty_fence() {
        assert!(parse_analysis("```json\n```").is_err());
    }
}
