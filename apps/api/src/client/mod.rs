//! Question Request Service: the caller-side wrapper around `POST /api/generate`.
//!
//! One request per call. No retry, no timeout beyond the transport's, no
//! cancellation. Responses may resolve out of order; callers that care use
//! `RequestTracker` tokens to drop stale ones.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::generation::request::{GenerateQuestionsRequest, GenerateQuestionsResponse};

pub const GENERATE_PATH: &str = "/api/generate";

pub const EMPTY_SKILLS_MESSAGE: &str = "Please select at least one skill to generate questions.";
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Failed to generate questions due to an unexpected network error.";
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// A generation is already outstanding for this plan.
    #[error("A question generation request is already in progress.")]
    InFlight,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Transport failure or a body that was not the expected JSON.
    #[error("Failed to generate questions due to an unexpected network error.")]
    Network(String),
}

impl RequestError {
    /// Short text to show next to the action that failed.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
    details: Option<String>,
}

impl ErrorPayload {
    fn message(self) -> String {
        self.error
            .filter(|m| !m.is_empty())
            .or(self.details.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
    }
}

#[derive(Clone)]
pub struct QuestionsClient {
    client: Client,
    endpoint: String,
}

impl QuestionsClient {
    /// `base_url` is the backend origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{GENERATE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Requests sample questions for a plan and returns them unmodified.
    pub async fn request_questions(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> Result<Vec<String>, RequestError> {
        if request.skills.is_empty() {
            return Err(RequestError::Validation(EMPTY_SKILLS_MESSAGE.to_string()));
        }

        debug!("Requesting questions for {} ({})", request.role, request.seniority);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| network_error("send", e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| network_error("read body", e))?;

        if !status.is_success() {
            let payload: ErrorPayload = serde_json::from_slice(&bytes)
                .map_err(|e| network_error("decode error body", e))?;
            return Err(RequestError::Server {
                status: status.as_u16(),
                message: payload.message(),
            });
        }

        let body: GenerateQuestionsResponse =
            serde_json::from_slice(&bytes).map_err(|e| network_error("decode body", e))?;
        Ok(body.questions)
    }
}

fn network_error(stage: &str, e: impl std::fmt::Display) -> RequestError {
    error!("Error calling backend to generate questions ({stage}): {e}");
    RequestError::Network(format!("{stage}: {e}"))
}

/// Identifies one issued request. Later tokens compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues monotonically increasing request tokens and remembers the latest,
/// so a response can be checked for staleness when it arrives.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True only for the most recently issued token.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}
