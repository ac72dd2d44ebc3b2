//! Generation provider wire types and reply extraction.
//!
//! The provider's response arrives in one of several shapes depending on
//! SDK version and path taken, so `GenerationResponse` deserializes all of
//! them tolerantly and [`extract_reply`] tries each extraction strategy in
//! a fixed order.

use serde::{Deserialize, Serialize};

/// Fixed reply substituted when no extraction strategy yields text.
///
/// This is appended to the transcript as a normal assistant turn; an
/// unrecognized response shape is a soft failure, unlike a failed
/// provider call which appends nothing.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I couldn't generate a response. Please try asking again.";

/// A request to the generation provider.
///
/// Carries the flattened transcript (role labels discarded, a documented
/// simplification) and the fixed system instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Transcript turn texts joined in dialogue order.
    pub contents: String,
    /// Persona and behavior instruction, including the current date.
    pub system_instruction: String,
}

/// A provider response in any of its observed shapes.
///
/// All fields are optional; which ones are populated depends on the
/// provider path that produced the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Top-level convenience text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,

    /// Alternate top-level text field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Nested candidate shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

/// One generation candidate in the nested response shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
}

/// Content block of a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A single part of candidate content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Extract reply text from a provider response.
///
/// Tries, in order: the top-level `output_text` field, the top-level
/// `text` field, then the first candidate's first content part. Empty and
/// whitespace-only values are skipped. Returns `None` when every strategy
/// comes up empty; callers substitute [`FALLBACK_REPLY`].
///
/// Pure function over the response value, independent of any provider
/// client.
pub fn extract_reply(response: &GenerationResponse) -> Option<String> {
    let strategies: [Option<&str>; 3] = [
        response.output_text.as_deref(),
        response.text.as_deref(),
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref()),
    ];

    strategies
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefers_output_text() {
        let response: GenerationResponse = serde_json::from_str(
            r#"{"output_text": "primary", "text": "secondary"}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(&response).as_deref(), Some("primary"));
    }

    #[test]
    fn test_extract_falls_through_to_text() {
        let response: GenerationResponse =
            serde_json::from_str(r#"{"text": "secondary"}"#).unwrap();
        assert_eq!(extract_reply(&response).as_deref(), Some("secondary"));
    }

    #[test]
    fn test_extract_candidate_path() {
        let response: GenerationResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "from candidate"}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_reply(&response).as_deref(), Some("from candidate"));
    }

    #[test]
    fn test_extract_skips_blank_values() {
        let response: GenerationResponse = serde_json::from_str(
            r#"{
                "output_text": "   ",
                "text": "",
                "candidates": [
                    {"content": {"parts": [{"text": "real text"}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_reply(&response).as_deref(), Some("real text"));
    }

    #[test]
    fn test_extract_none_when_all_absent() {
        let response: GenerationResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_reply(&response).is_none());
    }

    #[test]
    fn test_extract_none_for_empty_candidates() {
        let response: GenerationResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
        )
        .unwrap();
        assert!(extract_reply(&response).is_none());
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        // Real provider bodies carry usage metadata and model versions we
        // don't model; deserialization must not reject them.
        let response: GenerationResponse = serde_json::from_str(
            r#"{
                "candidates": [{"content": {"parts": [{"text": "hi"}]}}],
                "usageMetadata": {"promptTokenCount": 12},
                "modelVersion": "gemini-2.5-flash"
            }"#,
        )
        .unwrap();
        assert_eq!(extract_reply(&response).as_deref(), Some("hi"));
    }
}
