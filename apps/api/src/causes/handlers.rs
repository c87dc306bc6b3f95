//! Axum route handlers for the cause search API.

use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::causes::enrichment::enrich;
use crate::causes::models::CauseSuggestions;
use crate::causes::prompts::build_cause_prompt;
use crate::causes::request::CauseQuery;
use crate::errors::CauseError;
use crate::state::AppState;

/// POST /sugerir_causas
///
/// Validate → one Gemini call → keyword extraction → geocode → nearby places.
/// A failure after the Gemini call yields an empty `sugestoes`, never an error.
pub async fn handle_suggest_causes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CauseSuggestions>, CauseError> {
    let query = CauseQuery::from_body(&body)?;

    let prompt = build_cause_prompt(&query);
    let generated = state.llm.generate(&prompt).await?;

    let matches = enrich(state.places.as_deref(), query.localizacao(), &generated)
        .await
        .into_matches();
    info!(
        "Found {} organizations near '{}'",
        matches.len(),
        query.localizacao()
    );

    Ok(Json(CauseSuggestions::new(matches)))
}
