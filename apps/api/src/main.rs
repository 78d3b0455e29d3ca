use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use intervue_api::config::Config;
use intervue_api::generation::generator::{LlmQuestionGenerator, QuestionGenerator};
use intervue_api::llm_client::LlmClient;
use intervue_api::routes::build_router;
use intervue_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Intervue API v{}", env!("CARGO_PKG_VERSION"));

    let generator = build_generator(&config)?;

    let state = AppState {
        config: config.clone(),
        generator,
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

/// Builds the model-backed generator, or `None` when no API key is set.
fn build_generator(config: &Config) -> Result<Option<Arc<dyn QuestionGenerator>>> {
    let Some(api_key) = config.api_key.clone() else {
        warn!("API_KEY is not set; question generation will return a configuration error");
        return Ok(None);
    };

    let llm = LlmClient::new(api_key, &config.api_base, &config.model)?;
    info!("LLM client initialized (model: {})", llm.model());

    Ok(Some(Arc::new(LlmQuestionGenerator::new(
        llm,
        config.temperature,
    ))))
}
