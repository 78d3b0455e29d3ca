//! Rubric Engine: blends the selected skill mix with the seniority's base
//! weights into four integer percentages.
//!
//! Algorithm:
//! 1. Tally selected skills into core / algo / system buckets via the role's
//!    skill map (culture is never fed by skills)
//! 2. proportion = bucket / total selected (empty selection divides by 1)
//! 3. blended = round((proportion × 0.5 + base × 0.5) × 100)
//! 4. percentage = round(blended × 100 / Σ blended)
//!
//! Pure and deterministic. Independent rounding in step 4 can leave the total
//! one point away from 100.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::plan::catalog::{category_of, Seniority, SkillCategory, SkillMap};

const SKILL_MIX_SHARE: f64 = 0.5;
const SENIORITY_SHARE: f64 = 0.5;

/// The four scored dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RubricCategory {
    Core,
    Algo,
    System,
    Culture,
}

impl RubricCategory {
    pub const ALL: [RubricCategory; 4] = [
        RubricCategory::Core,
        RubricCategory::Algo,
        RubricCategory::System,
        RubricCategory::Culture,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RubricCategory::Core => "Core Role Skills",
            RubricCategory::Algo => "Problem Solving",
            RubricCategory::System => "System Design & Architecture",
            RubricCategory::Culture => "Collaboration & Culture",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl From<SkillCategory> for RubricCategory {
    fn from(category: SkillCategory) -> Self {
        match category {
            SkillCategory::Core => RubricCategory::Core,
            SkillCategory::Algo => RubricCategory::Algo,
            SkillCategory::System => RubricCategory::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricItem {
    pub label: String,
    pub value: u32,
}

/// Computes the rubric for a skill selection. Duplicate and reordered
/// selections produce the same result.
pub fn compute_rubric<I, S>(selected: I, seniority: Seniority, skill_map: &SkillMap) -> Vec<RubricItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = selected
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    let mut buckets = [0usize; 4];
    for skill in &unique {
        let category = RubricCategory::from(category_of(skill_map, skill));
        buckets[category.index()] += 1;
    }

    let total = match buckets.iter().sum::<usize>() {
        0 => 1.0,
        n => n as f64,
    };
    let base = seniority.weights().as_array();

    let mut blended = [0u32; 4];
    for (i, count) in buckets.iter().enumerate() {
        let proportion = *count as f64 / total;
        blended[i] = ((proportion * SKILL_MIX_SHARE + base[i] * SENIORITY_SHARE) * 100.0).round() as u32;
    }

    let sum = match blended.iter().sum::<u32>() {
        0 => 1.0,
        n => f64::from(n),
    };

    RubricCategory::ALL
        .iter()
        .map(|category| RubricItem {
            label: category.label().to_string(),
            value: (f64::from(blended[category.index()]) * 100.0 / sum).round() as u32,
        })
        .collect()
}
