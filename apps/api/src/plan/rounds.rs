use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shortest round a plan may schedule, in minutes.
pub const MIN_ROUND_MINUTES: u32 = 15;
/// Longest round a plan may schedule: one day.
pub const MAX_ROUND_MINUTES: u32 = 24 * 60;

/// One interview round. Only `mins` is editable once the role is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub focus: String,
    pub mins: u32,
    pub eval: String,
}

/// Clamps a duration into `[MIN_ROUND_MINUTES, MAX_ROUND_MINUTES]`.
pub fn clamp_minutes(mins: u32) -> u32 {
    mins.clamp(MIN_ROUND_MINUTES, MAX_ROUND_MINUTES)
}

/// Parses raw duration input. Anything that is not a number counts as 0
/// and is then clamped, so the result is always a valid round length.
pub fn parse_minutes(input: &str) -> u32 {
    minutes_from_f64(input.trim().parse::<f64>().unwrap_or(0.0))
}

/// Same rule as [`parse_minutes`] for a JSON value: numbers and numeric
/// strings are read, everything else counts as 0.
pub fn minutes_from_json(value: &Value) -> u32 {
    match value {
        Value::Number(n) => minutes_from_f64(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => parse_minutes(s),
        _ => MIN_ROUND_MINUTES,
    }
}

fn minutes_from_f64(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return MIN_ROUND_MINUTES;
    }
    clamp_minutes(value.min(f64::from(MAX_ROUND_MINUTES)) as u32)
}

/// Sum of all round durations.
pub fn total_minutes(rounds: &[Round]) -> u32 {
    rounds.iter().fold(0u32, |acc, r| acc.saturating_add(r.mins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_duration_clamped_to_fifteen() {
        assert_eq!(parse_minutes("5"), 15);
        assert_eq!(clamp_minutes(5), 15);
    }

    #[test]
    fn test_non_numeric_duration_clamped_to_fifteen() {
        assert_eq!(parse_minutes("abc"), 15);
        assert_eq!(parse_minutes(""), 15);
    }

    #[test]
    fn test_valid_duration_kept() {
        assert_eq!(parse_minutes("45"), 45);
        assert_eq!(parse_minutes(" 90 "), 90);
        assert_eq!(parse_minutes("15"), 15);
    }

    #[test]
    fn test_negative_duration_clamped() {
        assert_eq!(parse_minutes("-30"), 15);
    }

    #[test]
    fn test_long_duration_capped_at_one_day() {
        assert_eq!(parse_minutes("4294967295"), MAX_ROUND_MINUTES);
        assert_eq!(parse_minutes("1e30"), MAX_ROUND_MINUTES);
        assert_eq!(clamp_minutes(u32::MAX), MAX_ROUND_MINUTES);
        assert_eq!(parse_minutes("1440"), 1440);
    }

    #[test]
    fn test_json_duration_follows_text_rule() {
        assert_eq!(minutes_from_json(&json!("abc")), 15);
        assert_eq!(minutes_from_json(&json!(-5)), 15);
        assert_eq!(minutes_from_json(&json!(12.5)), 15);
        assert_eq!(minutes_from_json(&json!(null)), 15);
        assert_eq!(minutes_from_json(&json!("50")), 50);
        assert_eq!(minutes_from_json(&json!(75)), 75);
        assert_eq!(minutes_from_json(&json!(u64::MAX)), MAX_ROUND_MINUTES);
    }

    #[test]
    fn test_total_does_not_overflow() {
        let round = Round {
            name: "R1".to_string(),
            focus: "Coding".to_string(),
            mins: u32::MAX,
            eval: "Correctness".to_string(),
        };
        assert_eq!(total_minutes(&[round.clone(), round]), u32::MAX);
    }

    #[test]
    fn test_total_minutes() {
        let rounds = vec![
            Round {
                name: "R1".to_string(),
                focus: "Coding".to_string(),
                mins: 60,
                eval: "Correctness".to_string(),
            },
            Round {
                name: "R2".to_string(),
                focus: "Design".to_string(),
                mins: 45,
                eval: "Trade-offs".to_string(),
            },
        ];
        assert_eq!(total_minutes(&rounds), 105);
    }
}
