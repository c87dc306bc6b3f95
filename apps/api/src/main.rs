mod causes;
mod config;
mod errors;
mod llm_client;
mod maps_client;
mod payload;
mod routes;
mod state;
mod suggestions;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::maps_client::{GoogleMapsClient, PlacesLookup};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast when GEMINI_API_KEY is missing
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Conectando API v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let places = match &config.maps_api_key {
        Some(key) => {
            let client = GoogleMapsClient::new(key.clone(), config.maps_base_url.clone())?;
            info!("Maps client initialized");
            Some(Arc::new(client) as Arc<dyn PlacesLookup>)
        }
        None => {
            warn!("GOOGLE_MAPS_API_KEY not set; /sugerir_causas will return no organizations");
            None
        }
    };

    let state = AppState {
        llm: Arc::new(llm),
        places,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
