use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Never touches upstream services.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "backend_ok" }))
}

/// GET /
pub async fn root_handler() -> &'static str {
    "Servidor Backend 'Conectando' está no ar! Acesse o frontend para interagir."
}
