//! Wire types for `POST /api/generate`, shared by the handler and the client.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;
pub const MIN_QUESTION_COUNT: u32 = 3;
pub const MAX_QUESTION_COUNT: u32 = 10;

/// Request as sent by a caller. `role` is the human-readable role label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub role: String,
    pub seniority: String,
    pub skills: Vec<String>,
    pub styles: Vec<String>,
    #[serde(
        rename = "numQuestions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub num_questions: Option<u32>,
}

/// Request as received by the handler. Every field is optional so missing
/// fields become a 400 with a readable message instead of a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuestionsBody {
    pub role: Option<String>,
    pub seniority: Option<String>,
    pub skills: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    #[serde(rename = "numQuestions")]
    pub num_questions: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

/// A body that passed validation, with the question count resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub role: String,
    pub seniority: String,
    pub skills: Vec<String>,
    pub styles: Vec<String>,
    pub question_count: u32,
}

impl GenerateQuestionsBody {
    pub fn validate(self) -> Result<ValidatedRequest, AppError> {
        let missing = || {
            AppError::Validation("Missing required fields: role, seniority, and skills.".to_string())
        };

        let role = self.role.filter(|r| !r.trim().is_empty()).ok_or_else(missing)?;
        let seniority = self
            .seniority
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(missing)?;
        let skills = self.skills.filter(|s| !s.is_empty()).ok_or_else(missing)?;

        Ok(ValidatedRequest {
            role,
            seniority,
            skills,
            styles: self.styles.unwrap_or_default(),
            question_count: resolve_question_count(self.num_questions),
        })
    }
}

/// Absent or non-finite counts use the default; anything else is rounded
/// and clamped into `[MIN_QUESTION_COUNT, MAX_QUESTION_COUNT]`.
pub fn resolve_question_count(requested: Option<f64>) -> u32 {
    match requested {
        Some(n) if n.is_finite() => n
            .round()
            .clamp(f64::from(MIN_QUESTION_COUNT), f64::from(MAX_QUESTION_COUNT))
            as u32,
        _ => DEFAULT_QUESTION_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> GenerateQuestionsBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_question_count_defaults_to_five() {
        assert_eq!(resolve_question_count(None), 5);
        assert_eq!(resolve_question_count(Some(f64::NAN)), 5);
    }

    #[test]
    fn test_question_count_clamped() {
        assert_eq!(resolve_question_count(Some(15.0)), 10);
        assert_eq!(resolve_question_count(Some(1.0)), 3);
        assert_eq!(resolve_question_count(Some(-4.0)), 3);
        assert_eq!(resolve_question_count(Some(7.0)), 7);
        assert_eq!(resolve_question_count(Some(6.6)), 7);
    }

    #[test]
    fn test_missing_skills_rejected() {
        let err = body(r#"{"role":"Backend Engineer","seniority":"mid","skills":[]}"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("role, seniority, and skills"));
    }

    #[test]
    fn test_blank_role_rejected() {
        let err = body(r#"{"role":"  ","seniority":"mid","skills":["Go"]}"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_styles_optional() {
        let request = body(r#"{"role":"Backend Engineer","seniority":"mid","skills":["Go"]}"#)
            .validate()
            .unwrap();
        assert!(request.styles.is_empty());
        assert_eq!(request.question_count, 5);
    }

    #[test]
    fn test_null_styles_treated_as_none() {
        let request =
            body(r#"{"role":"Backend Engineer","seniority":"mid","skills":["Go"],"styles":null}"#)
                .validate()
                .unwrap();
        assert!(request.styles.is_empty());
    }

    #[test]
    fn test_client_request_omits_absent_count() {
        let request = GenerateQuestionsRequest {
            role: "QA / Test Engineer".to_string(),
            seniority: "junior".to_string(),
            skills: vec!["Test Design".to_string()],
            styles: vec![],
            num_questions: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("numQuestions").is_none());

        let with_count = GenerateQuestionsRequest {
            num_questions: Some(8),
            ..request
        };
        let json = serde_json::to_value(&with_count).unwrap();
        assert_eq!(json["numQuestions"], 8);
    }
}
