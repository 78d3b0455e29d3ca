//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::build_questions_prompt;
use crate::generation::request::{GenerateQuestionsBody, GenerateQuestionsResponse};
use crate::state::AppState;

/// POST /api/generate
///
/// Validates the plan, builds the instruction and asks the model for sample
/// questions. One round trip: validating → awaiting model → success | failed.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateQuestionsBody>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let generator = state
        .generator
        .clone()
        .ok_or_else(|| AppError::Configuration("API_KEY is not set".to_string()))?;

    debug!("generation: validating");
    let Json(body) = body.map_err(|e| AppError::InvalidBody(e.body_text()))?;
    let request = body.validate()?;

    let prompt = build_questions_prompt(&request);

    debug!(
        "generation: awaiting model ({} questions, {} skills)",
        request.question_count,
        request.skills.len()
    );
    let questions = generator.generate(&prompt).await?;

    info!(
        "Generated {} questions for {} ({})",
        questions.len(),
        request.role,
        request.seniority
    );
    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// Any verb other than POST on /api/generate.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
