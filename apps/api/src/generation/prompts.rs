// Prompt template for interview question generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::generation::request::ValidatedRequest;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Question-generation prompt template.
/// Replace: {count}, {role}, {seniority}, {skills}, {styles}, {json_only}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer creating an interview plan.
Generate {count} insightful and distinct interview questions for a candidate.

**Role Details:**
- Role: {role}
- Seniority: {seniority}
- Core Skills to assess: {skills}
- Preferred Question Styles: {styles}

**Instructions:**
1. Create questions that are specific, open-ended, and directly probe the listed skills.
2. Tailor the complexity and scope of the questions to the specified seniority level.
3. Ensure the questions align with the preferred question styles. For example, if 'System design' is a style, one question must be a system design prompt. If 'Live coding' is a style, provide a clear coding problem.
4. {json_only}
5. Provide only the questions in a JSON object of the form {"questions": ["..."]}."#;

pub const QUESTION_ITEM_DESCRIPTION: &str = "An interview question.";

/// Builds the model instruction for a validated request.
pub fn build_questions_prompt(request: &ValidatedRequest) -> String {
    QUESTIONS_PROMPT_TEMPLATE
        .replace("{count}", &request.question_count.to_string())
        .replace("{role}", &request.role)
        .replace("{seniority}", &request.seniority)
        .replace("{skills}", &request.skills.join(", "))
        .replace("{styles}", &request.styles.join(", "))
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::request::resolve_question_count;

    fn request(count: Option<f64>, styles: &[&str]) -> ValidatedRequest {
        ValidatedRequest {
            role: "Backend Engineer".to_string(),
            seniority: "senior".to_string(),
            skills: vec!["Go".to_string(), "Caching".to_string()],
            styles: styles.iter().map(|s| s.to_string()).collect(),
            question_count: resolve_question_count(count),
        }
    }

    #[test]
    fn test_prompt_embeds_role_details() {
        let prompt = build_questions_prompt(&request(None, &["Live coding", "System design"]));
        assert!(prompt.contains("Generate 5 insightful"));
        assert!(prompt.contains("- Role: Backend Engineer"));
        assert!(prompt.contains("- Seniority: senior"));
        assert!(prompt.contains("Core Skills to assess: Go, Caching"));
        assert!(prompt.contains("Preferred Question Styles: Live coding, System design"));
    }

    #[test]
    fn test_prompt_uses_clamped_count() {
        let prompt = build_questions_prompt(&request(Some(15.0), &[]));
        assert!(prompt.contains("Generate 10 insightful"));
    }

    #[test]
    fn test_prompt_requires_style_specific_questions() {
        let prompt = build_questions_prompt(&request(None, &["System design"]));
        assert!(prompt.contains("one question must be a system design prompt"));
        assert!(prompt.contains("provide a clear coding problem"));
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        let prompt = build_questions_prompt(&request(Some(4.0), &["Take-home"]));
        for placeholder in ["{count}", "{role}", "{seniority}", "{skills}", "{styles}", "{json_only}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }
}
