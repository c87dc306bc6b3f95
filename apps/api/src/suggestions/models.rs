use serde::Serialize;

/// Response body of `POST /api/get-suggestions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub processed_response: String,
}

impl SuggestionResult {
    /// Wraps the generated text verbatim.
    pub fn from_generated(text: String) -> Self {
        Self {
            processed_response: text,
        }
    }
}
