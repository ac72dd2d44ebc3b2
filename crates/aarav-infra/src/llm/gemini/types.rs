//! Wire types for the Gemini `generateContent` REST API.

use serde::Serialize;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
}

/// A content block: a list of parts.
#[derive(Debug, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// Single-part text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

/// A single text part.
#[derive(Debug, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GeminiRequest {
            contents: vec![GeminiContent::text("Hello\nNamaste!")],
            system_instruction: Some(GeminiContent::text("Be kind.")),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello\nNamaste!");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be kind.");
    }

    #[test]
    fn test_system_instruction_omitted_when_absent() {
        let request = GeminiRequest {
            contents: vec![GeminiContent::text("hi")],
            system_instruction: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }
}
