use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::payload::PayloadError;

const MISSING_PAYLOAD_MESSAGE: &str = "Nenhum dado recebido";
const INTERNAL_ERROR_MESSAGE: &str = "Erro interno no servidor ao processar sua solicitação.";

fn incomplete_message(missing: &[&str]) -> String {
    format!(
        "Dados incompletos. Campos obrigatórios ausentes: {}",
        missing.join(", ")
    )
}

/// Error type for `/api/get-suggestions`.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No JSON payload received")]
    MissingPayload,

    #[error("Incomplete profile, missing: {}", .0.join(", "))]
    IncompleteProfile(Vec<&'static str>),

    #[error("Suggestion generation failed: {0}")]
    SuggestionGenerationFailed(#[from] LlmError),
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::MissingPayload => AppError::MissingPayload,
            PayloadError::MissingFields { missing } => AppError::IncompleteProfile(missing),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingPayload => (
                StatusCode::BAD_REQUEST,
                json!({ "error": MISSING_PAYLOAD_MESSAGE }),
            ),
            AppError::IncompleteProfile(missing) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": incomplete_message(missing) }),
            ),
            AppError::SuggestionGenerationFailed(e) => {
                tracing::error!("Suggestion generation failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": INTERNAL_ERROR_MESSAGE,
                        "details": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Error type for `/sugerir_causas`, whose clients expect Portuguese keys.
#[derive(Debug, Error)]
pub enum CauseError {
    #[error("No JSON payload received")]
    MissingPayload,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Suggestion generation failed: {0}")]
    SuggestionGenerationFailed(#[from] LlmError),
}

impl From<PayloadError> for CauseError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::MissingPayload => CauseError::MissingPayload,
            PayloadError::MissingFields { missing } => CauseError::MissingFields(missing),
        }
    }
}

impl IntoResponse for CauseError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            CauseError::MissingPayload => (
                StatusCode::BAD_REQUEST,
                json!({ "erro": MISSING_PAYLOAD_MESSAGE }),
            ),
            CauseError::MissingFields(missing) => (
                StatusCode::BAD_REQUEST,
                json!({ "erro": incomplete_message(missing) }),
            ),
            CauseError::SuggestionGenerationFailed(e) => {
                tracing::error!("Cause suggestion generation failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "erro": INTERNAL_ERROR_MESSAGE,
                        "detalhes": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
