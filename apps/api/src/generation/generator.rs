//! Question Generator: pluggable, trait-based seam between the handler and
//! the model provider.
//!
//! Default: `LlmQuestionGenerator` (Gemini via `llm_client`).
//! `AppState` holds an `Option<Arc<dyn QuestionGenerator>>`; `None` means no
//! provider credential was configured.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::prompts::QUESTION_ITEM_DESCRIPTION;
use crate::llm_client::prompts::string_array_schema;
use crate::llm_client::{GenerationOptions, LlmClient, LlmError};

/// Prompt in, questions out. Implement this to swap providers without
/// touching validation, clamping or the handler.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>, AppError>;
}

pub struct LlmQuestionGenerator {
    llm: LlmClient,
    temperature: f32,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    fn options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            response_schema: Some(string_array_schema("questions", QUESTION_ITEM_DESCRIPTION)),
        }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>, AppError> {
        let value: Value = self.llm.call_json(prompt, &self.options()).await?;
        Ok(extract_questions(value)?)
    }
}

/// Pulls the `questions` string array out of the model's JSON. Anything
/// else is a format error; nothing is coerced.
pub fn extract_questions(value: Value) -> Result<Vec<String>, LlmError> {
    let Value::Object(mut object) = value else {
        return Err(LlmError::Format(
            "Invalid or empty response format from the model: expected a JSON object".to_string(),
        ));
    };

    let Some(Value::Array(items)) = object.remove("questions") else {
        return Err(LlmError::Format(
            "Invalid or empty response format from the model: missing `questions` array"
                .to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(question) => Ok(question),
            other => Err(LlmError::Format(format!(
                "question {i} is not a string: {other}"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::json;

    #[test]
    fn test_extract_questions_verbatim() {
        let questions = extract_questions(json!({"questions": ["Q1", "Q2"]})).unwrap();
        assert_eq!(questions, vec!["Q1", "Q2"]);
    }

    #[test]
    fn test_extract_questions_allows_empty_array() {
        assert!(extract_questions(json!({"questions": []})).unwrap().is_empty());
    }

    #[test]
    fn test_bare_array_is_format_error() {
        let err = extract_questions(json!(["Q1"])).unwrap_err();
        assert!(matches!(err, LlmError::Format(_)));
    }

    #[test]
    fn test_missing_questions_is_format_error() {
        let err = extract_questions(json!({"items": ["Q1"]})).unwrap_err();
        assert!(err.to_string().contains("questions"));
    }

    #[test]
    fn test_non_string_question_is_format_error() {
        let err = extract_questions(json!({"questions": ["Q1", 2]})).unwrap_err();
        assert!(err.to_string().contains("question 1"));
    }

    async fn spawn_upstream(text: &'static str) -> String {
        let app = Router::new().route(
            "/models/:call",
            post(move |Json(body): Json<Value>| async move {
                // Structured-output constraint travels with every call.
                let config = &body["generationConfig"];
                assert_eq!(config["responseMimeType"], "application/json");
                assert_eq!(
                    config["responseSchema"]["properties"]["questions"]["type"],
                    "ARRAY"
                );
                Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    fn generator(base: &str) -> LlmQuestionGenerator {
        let llm = LlmClient::new("key".to_string(), base, "gemini-2.5-flash").unwrap();
        LlmQuestionGenerator::new(llm, 0.7)
    }

    #[tokio::test]
    async fn test_generator_returns_model_questions() {
        let base = spawn_upstream(r#"{"questions": ["Design a URL shortener.", "Reverse a list."]}"#).await;
        let questions = generator(&base).generate("prompt").await.unwrap();
        assert_eq!(questions, vec!["Design a URL shortener.", "Reverse a list."]);
    }

    #[tokio::test]
    async fn test_generator_maps_unparseable_output_to_format_error() {
        let base = spawn_upstream("Sure! Here are five questions.").await;
        let err = generator(&base).generate("prompt").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamFormat(_)));
    }
}
