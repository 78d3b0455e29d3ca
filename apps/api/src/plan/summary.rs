//! Printable plan summary: the render step of the plan cycle.

use chrono::NaiveDate;

use crate::plan::lead::PLACEHOLDER;
use crate::plan::state::PlanState;

const LABEL_WIDTH: usize = 32;

/// Renders the plan as plain text suitable for printing.
pub fn render_summary(state: &PlanState, generated_on: NaiveDate) -> String {
    let profile = state.profile();
    let mut out = String::new();

    out.push_str(&format!(
        "Interview Plan: {} ({})\n",
        profile.label,
        state.seniority.label()
    ));
    out.push_str(&format!("Prepared for: {}\n", prepared_for(state)));
    out.push_str(&format!("Generated: {}\n", generated_on.format("%Y-%m-%d")));

    out.push_str(&format!("\nRounds (total {} min)\n", state.total_minutes()));
    for round in &state.rounds {
        out.push_str(&format!(
            "  {:<4}{:<w$}{:>4} min  {}\n",
            round.name,
            round.focus,
            round.mins,
            round.eval,
            w = LABEL_WIDTH
        ));
    }

    out.push_str("\nRubric\n");
    for item in state.rubric() {
        out.push_str(&format!("  {:<w$}{:>4}%\n", item.label, item.value, w = LABEL_WIDTH));
    }

    out.push_str(&format!("\nSkills: {}\n", join_or_none(&state.selected_skills)));
    out.push_str(&format!("Question styles: {}\n", join_or_none(&state.styles)));

    if !state.sample_questions.is_empty() {
        out.push_str("\nSample questions\n");
        for (i, question) in state.sample_questions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, question));
        }
    }

    out
}

fn prepared_for(state: &PlanState) -> String {
    let lead = &state.lead;
    let mut line = format!("{} <{}>", lead.name, lead.email);
    let extras: Vec<&str> = [lead.title.as_str(), lead.company.as_str()]
        .into_iter()
        .filter(|v| !v.is_empty() && *v != PLACEHOLDER)
        .collect();
    if !extras.is_empty() {
        line.push_str(", ");
        line.push_str(&extras.join(", "));
    }
    line
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::catalog::{Role, Seniority};
    use crate::plan::lead::Lead;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn plan() -> PlanState {
        let mut state = PlanState::for_role(Role::Backend, Seniority::Senior);
        state.lead = Lead {
            name: "Jane Doe".to_string(),
            email: "jane@acme.io".to_string(),
            company: "Acme Corp".to_string(),
            title: PLACEHOLDER.to_string(),
        };
        state
    }

    #[test]
    fn test_summary_header_and_sections() {
        let text = render_summary(&plan(), date());
        assert!(text.starts_with("Interview Plan: Backend Engineer (Senior)\n"));
        assert!(text.contains("Prepared for: Jane Doe <jane@acme.io>, Acme Corp\n"));
        assert!(text.contains("Generated: 2026-10-19"));
        assert!(text.contains("Rounds (total 165 min)"));
        assert!(text.contains("Collaboration & Culture"));
        assert!(text.contains("Skills: Java, Python, Go, Node.js"));
        assert!(text.contains("Question styles: Live coding"));
    }

    #[test]
    fn test_rubric_values_match_engine() {
        let state = plan();
        let text = render_summary(&state, date());
        for item in state.rubric() {
            let line = text
                .lines()
                .find(|l| l.trim_start().starts_with(&item.label))
                .unwrap();
            assert!(line.trim_end().ends_with(&format!("{}%", item.value)));
        }
    }

    #[test]
    fn test_questions_section_only_when_present() {
        let mut state = plan();
        assert!(!render_summary(&state, date()).contains("Sample questions"));

        state.sample_questions = vec!["Design a rate limiter.".to_string()];
        let text = render_summary(&state, date());
        assert!(text.contains("Sample questions\n  1. Design a rate limiter."));
    }

    #[test]
    fn test_empty_selections_show_placeholder() {
        let mut state = plan();
        state.selected_skills.clear();
        state.styles.clear();
        let text = render_summary(&state, date());
        assert!(text.contains(&format!("Skills: {PLACEHOLDER}")));
        assert!(text.contains(&format!("Question styles: {PLACEHOLDER}")));
    }
}
