//! Plan state: the whole interview plan as one explicit value, changed only
//! through `PlanState::apply`.
//!
//! Persistence happens at the `PlanStore` boundary passed into `apply`;
//! store failures are logged and never block an update.

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::{RequestError, RequestToken, RequestTracker, EMPTY_SKILLS_MESSAGE};
use crate::generation::request::GenerateQuestionsRequest;
use crate::plan::catalog::{Role, RoleProfile, Seniority, DEFAULT_STYLE, QUESTION_STYLES};
use crate::plan::lead::Lead;
use crate::plan::rounds::{parse_minutes, total_minutes, Round};
use crate::plan::rubric::{compute_rubric, RubricItem};
use crate::plan::store::{
    clear_saved_plan, save_role, save_selected_skills, save_seniority, PlanStore, SavedPlan,
    StoreError,
};

/// A user-driven change to the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    SelectRole(Role),
    SelectSeniority(Seniority),
    ToggleSkill(String),
    ToggleStyle(String),
    SetRoundDuration { index: usize, input: String },
    SetLead(Lead),
    QuestionsReceived {
        token: RequestToken,
        result: Result<Vec<String>, RequestError>,
    },
    Reset,
}

#[derive(Debug, Serialize)]
pub struct PlanState {
    pub role: Role,
    pub seniority: Seniority,
    /// Selection order is kept for display; membership is what counts.
    pub selected_skills: Vec<String>,
    pub styles: Vec<String>,
    pub rounds: Vec<Round>,
    pub lead: Lead,
    pub sample_questions: Vec<String>,
    pub is_generating: bool,
    pub error: Option<String>,
    #[serde(skip)]
    requests: RequestTracker,
}

impl Default for PlanState {
    fn default() -> Self {
        Self::for_role(Role::default(), Seniority::default())
    }
}

impl PlanState {
    /// Fresh plan for a role with its default skills, rounds and styles.
    pub fn for_role(role: Role, seniority: Seniority) -> Self {
        let profile = role.profile();
        Self {
            role,
            seniority,
            selected_skills: profile.default_skills(),
            styles: vec![DEFAULT_STYLE.to_string()],
            rounds: profile.default_rounds(),
            lead: Lead::default(),
            sample_questions: Vec::new(),
            is_generating: false,
            error: None,
            requests: RequestTracker::default(),
        }
    }

    /// Restores the last saved selections. An empty or missing skill
    /// selection falls back to the role's defaults.
    pub fn from_saved(saved: SavedPlan) -> Self {
        let mut state = Self::for_role(
            saved.role.unwrap_or_default(),
            saved.seniority.unwrap_or_default(),
        );
        if let Some(skills) = saved.selected_skills.filter(|s| !s.is_empty()) {
            state.selected_skills = dedup(skills);
        }
        state
    }

    pub fn profile(&self) -> &'static RoleProfile {
        self.role.profile()
    }

    pub fn rubric(&self) -> Vec<RubricItem> {
        compute_rubric(&self.selected_skills, self.seniority, self.profile().skill_map)
    }

    pub fn total_minutes(&self) -> u32 {
        total_minutes(&self.rounds)
    }

    pub fn apply(&mut self, action: PlanAction, store: &mut dyn PlanStore) {
        match action {
            PlanAction::SelectRole(role) => {
                self.select_role(role);
                persist("role", save_role(store, role));
                persist("skills", save_selected_skills(store, &self.selected_skills));
            }
            PlanAction::SelectSeniority(seniority) => {
                self.seniority = seniority;
                persist("seniority", save_seniority(store, seniority));
            }
            PlanAction::ToggleSkill(skill) => {
                toggle(&mut self.selected_skills, skill);
                persist("skills", save_selected_skills(store, &self.selected_skills));
            }
            PlanAction::ToggleStyle(style) => {
                toggle(&mut self.styles, style);
                self.styles.sort_by_key(|s| style_rank(s));
            }
            PlanAction::SetRoundDuration { index, input } => match self.rounds.get_mut(index) {
                Some(round) => round.mins = parse_minutes(&input),
                None => warn!("Ignoring duration for unknown round {index}"),
            },
            PlanAction::SetLead(lead) => self.lead = lead,
            PlanAction::QuestionsReceived { token, result } => {
                self.finish_generation(token, result);
            }
            PlanAction::Reset => {
                persist("reset", clear_saved_plan(store));
                let requests = std::mem::take(&mut self.requests);
                *self = Self::default();
                self.requests = requests;
                // Any response still in flight belongs to the old plan.
                self.requests.issue();
            }
        }
    }

    /// Starts a generation: validates the selection, clears the previous
    /// questions and error, and returns the request to send with its token.
    pub fn begin_generation(
        &mut self,
    ) -> Result<(RequestToken, GenerateQuestionsRequest), RequestError> {
        if self.selected_skills.is_empty() {
            self.error = Some(EMPTY_SKILLS_MESSAGE.to_string());
            return Err(RequestError::Validation(EMPTY_SKILLS_MESSAGE.to_string()));
        }
        if self.is_generating {
            return Err(RequestError::InFlight);
        }

        self.is_generating = true;
        self.error = None;
        self.sample_questions.clear();

        let request = GenerateQuestionsRequest {
            role: self.profile().label.to_string(),
            seniority: self.seniority.id().to_string(),
            skills: self.selected_skills.clone(),
            styles: self.styles.clone(),
            num_questions: None,
        };
        Ok((self.requests.issue(), request))
    }

    fn finish_generation(&mut self, token: RequestToken, result: Result<Vec<String>, RequestError>) {
        if !self.requests.is_current(token) {
            debug!("Ignoring stale question response {token:?}");
            return;
        }
        self.is_generating = false;
        match result {
            Ok(questions) => self.sample_questions = questions,
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    fn select_role(&mut self, role: Role) {
        if role == self.role {
            return;
        }
        let profile = role.profile();
        self.role = role;
        self.selected_skills = profile.default_skills();
        self.rounds = profile.default_rounds();
        self.sample_questions.clear();
        self.error = None;
        if self.is_generating {
            self.is_generating = false;
            self.requests.issue();
        }
    }
}

fn toggle(items: &mut Vec<String>, item: String) {
    match items.iter().position(|i| *i == item) {
        Some(pos) => {
            items.remove(pos);
        }
        None => items.push(item),
    }
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Catalog order for known styles; unknown styles sort last.
fn style_rank(style: &str) -> usize {
    QUESTION_STYLES
        .iter()
        .position(|s| *s == style)
        .unwrap_or(QUESTION_STYLES.len())
}

fn persist(what: &str, result: Result<(), StoreError>) {
    if let Err(e) = result {
        warn!("Failed to persist plan {what}: {e}");
    }
}
