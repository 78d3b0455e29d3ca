use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; handlers share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable question generator. `None` when no provider credential is configured,
    /// in which case generation requests fail with a configuration error.
    pub generator: Option<Arc<dyn QuestionGenerator>>,
}
