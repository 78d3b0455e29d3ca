//! Shared fixtures for handler and client tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::generator::QuestionGenerator;
use crate::routes::build_router;
use crate::state::AppState;

pub fn test_config() -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        api_base: "http://127.0.0.1:9".to_string(),
        temperature: 0.7,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// Generator that records every prompt and replies with a canned result.
pub struct FakeGenerator {
    pub prompts: Mutex<Vec<String>>,
    reply: fn() -> Result<Vec<String>, AppError>,
}

impl FakeGenerator {
    pub fn replying(reply: fn() -> Result<Vec<String>, AppError>) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply,
        })
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl QuestionGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.reply)()
    }
}

pub fn router_with(generator: Option<Arc<FakeGenerator>>) -> Router {
    build_router(AppState {
        config: test_config(),
        generator: generator.map(|g| g as Arc<dyn QuestionGenerator>),
    })
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}
