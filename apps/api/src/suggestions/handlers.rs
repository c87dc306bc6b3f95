//! Axum route handlers for the suggestion API.

use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::models::SuggestionResult;
use crate::suggestions::profile::Profile;
use crate::suggestions::prompts::build_suggestion_prompt;

/// POST /api/get-suggestions
///
/// Validate → build prompt → one Gemini call → `{processedResponse}`.
/// Validation errors return before any upstream call is made.
pub async fn handle_get_suggestions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuggestionResult>, AppError> {
    let profile = Profile::from_body(&body)?;
    info!("Generating suggestion for location '{}'", profile.location());

    let prompt = build_suggestion_prompt(&profile);
    let text = state.llm.generate(&prompt).await?;

    Ok(Json(SuggestionResult::from_generated(text)))
}
