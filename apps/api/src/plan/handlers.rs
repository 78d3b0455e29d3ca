//! Axum route handlers for the Plan API: catalog, rubric preview and
//! printable summary.

use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::plan::catalog::{Role, Seniority, SeniorityWeights, SkillCategory, QUESTION_STYLES};
use crate::plan::lead::Lead;
use crate::plan::rounds::{minutes_from_json, Round};
use crate::plan::rubric::{compute_rubric, RubricItem};
use crate::plan::state::PlanState;
use crate::plan::summary::render_summary;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleEntry {
    pub id: Role,
    pub label: &'static str,
    pub skills: &'static [&'static str],
    pub rounds: Vec<Round>,
    pub skill_map: BTreeMap<&'static str, SkillCategory>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub roles: Vec<RoleEntry>,
    pub seniority_weights: BTreeMap<&'static str, SeniorityWeights>,
    pub styles: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct RubricRequest {
    pub role: Role,
    pub seniority: Seniority,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RubricResponse {
    pub rubric: Vec<RubricItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub role: Role,
    pub seniority: Seniority,
    pub skills: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    /// Raw per-round duration inputs in round order; missing entries keep
    /// the default.
    #[serde(default)]
    pub round_minutes: Vec<Value>,
    pub lead: Lead,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/roles
///
/// Static catalog the form is built from.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    let roles = Role::ALL
        .iter()
        .map(|role| {
            let profile = role.profile();
            RoleEntry {
                id: *role,
                label: profile.label,
                skills: profile.skills,
                rounds: profile.default_rounds(),
                skill_map: profile.skill_map.iter().copied().collect(),
            }
        })
        .collect();

    let seniority_weights = Seniority::ALL
        .iter()
        .map(|s| (s.id(), s.weights()))
        .collect();

    Json(CatalogResponse {
        roles,
        seniority_weights,
        styles: QUESTION_STYLES,
    })
}

/// POST /api/rubric
///
/// Rubric for a role, seniority and skill selection.
pub async fn handle_rubric(
    body: Result<Json<RubricRequest>, JsonRejection>,
) -> Result<Json<RubricResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::InvalidBody(e.body_text()))?;
    let rubric = compute_rubric(
        &request.skills,
        request.seniority,
        request.role.profile().skill_map,
    );
    Ok(Json(RubricResponse { rubric }))
}

/// POST /api/summary
///
/// Printable text summary of a complete plan. The lead must be valid.
pub async fn handle_summary(
    body: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let mut state = PlanState::for_role(request.role, request.seniority);
    state.lead = request.lead.validated()?;
    state.selected_skills = request.skills;
    state.styles = request.styles;
    state.sample_questions = request.questions;
    for (round, input) in state.rounds.iter_mut().zip(&request.round_minutes) {
        round.mins = minutes_from_json(input);
    }

    let summary = render_summary(&state, Utc::now().date_naive());
    Ok(Json(SummaryResponse { summary }))
}
