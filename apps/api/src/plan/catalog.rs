//! Static role catalog: skills, default rounds and skill categories per role,
//! plus the base rubric weights per seniority tier.
//!
//! Everything here is immutable reference data. Per-plan mutable copies
//! (round durations, skill selection) live in `plan::state`.

use serde::{Deserialize, Serialize};

use crate::plan::rounds::Round;

/// The job function being interviewed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Backend,
    Frontend,
    DataSci,
    DevOps,
    Qa,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Backend,
        Role::Frontend,
        Role::DataSci,
        Role::DevOps,
        Role::Qa,
    ];

    /// Identifier used on the wire and as the persisted value.
    pub fn id(self) -> &'static str {
        match self {
            Role::Backend => "backend",
            Role::Frontend => "frontend",
            Role::DataSci => "datasci",
            Role::DevOps => "devops",
            Role::Qa => "qa",
        }
    }

    pub fn profile(self) -> &'static RoleProfile {
        match self {
            Role::Backend => &BACKEND,
            Role::Frontend => &FRONTEND,
            Role::DataSci => &DATA_SCIENCE,
            Role::DevOps => &DEVOPS,
            Role::Qa => &QA,
        }
    }
}

/// Experience tier. Drives the base rubric weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl Seniority {
    pub const ALL: [Seniority; 3] = [Seniority::Junior, Seniority::Mid, Seniority::Senior];

    pub fn id(self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
        }
    }

    /// Capitalized form shown in the summary header.
    pub fn label(self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
        }
    }

    pub fn weights(self) -> SeniorityWeights {
        match self {
            Seniority::Junior => SeniorityWeights {
                core: 0.4,
                algo: 0.4,
                system: 0.1,
                culture: 0.1,
            },
            Seniority::Mid => SeniorityWeights {
                core: 0.35,
                algo: 0.25,
                system: 0.25,
                culture: 0.15,
            },
            Seniority::Senior => SeniorityWeights {
                core: 0.25,
                algo: 0.15,
                system: 0.4,
                culture: 0.2,
            },
        }
    }
}

/// Category a skill contributes to. Culture is never a skill category;
/// it only enters the rubric through seniority weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Core,
    Algo,
    System,
}

/// Base proportions for the four rubric categories. Each tier sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeniorityWeights {
    pub core: f64,
    pub algo: f64,
    pub system: f64,
    pub culture: f64,
}

impl SeniorityWeights {
    /// Weights in rubric order: core, algo, system, culture.
    pub fn as_array(&self) -> [f64; 4] {
        [self.core, self.algo, self.system, self.culture]
    }
}

/// Static round definition. Copied into a mutable `Round` when a role is chosen.
#[derive(Debug)]
pub struct RoundTemplate {
    pub name: &'static str,
    pub focus: &'static str,
    pub mins: u32,
    pub eval: &'static str,
}

impl RoundTemplate {
    pub fn to_round(&self) -> Round {
        Round {
            name: self.name.to_string(),
            focus: self.focus.to_string(),
            mins: self.mins,
            eval: self.eval.to_string(),
        }
    }
}

/// Skill name → category lookup table for one role.
pub type SkillMap = [(&'static str, SkillCategory)];

#[derive(Debug)]
pub struct RoleProfile {
    pub label: &'static str,
    pub skills: &'static [&'static str],
    pub rounds: &'static [RoundTemplate],
    pub skill_map: &'static SkillMap,
}

impl RoleProfile {
    /// Fresh, editable copies of the role's default rounds.
    pub fn default_rounds(&self) -> Vec<Round> {
        self.rounds.iter().map(RoundTemplate::to_round).collect()
    }

    /// Skills pre-selected when the role is first chosen.
    pub fn default_skills(&self) -> Vec<String> {
        self.skills
            .iter()
            .take(DEFAULT_SKILL_COUNT)
            .map(|s| s.to_string())
            .collect()
    }
}

/// Looks up a skill's category. Unmapped skills count as core.
pub fn category_of(skill_map: &SkillMap, skill: &str) -> SkillCategory {
    skill_map
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, category)| *category)
        .unwrap_or(SkillCategory::Core)
}

const DEFAULT_SKILL_COUNT: usize = 4;

/// Question formats a plan can ask the model to favour.
pub const QUESTION_STYLES: &[&str] = &[
    "Live coding",
    "Theoretical Q&A",
    "System design",
    "Pair programming",
    "Case simulation",
    "Take-home",
];

pub const DEFAULT_STYLE: &str = "Live coding";

use SkillCategory::{Algo, Core, System};

static BACKEND: RoleProfile = RoleProfile {
    label: "Backend Engineer",
    skills: &[
        "Java",
        "Python",
        "Go",
        "Node.js",
        "SQL",
        "Data Structures & Algorithms",
        "System Design",
        "APIs",
        "Caching",
        "Microservices",
    ],
    rounds: &[
        RoundTemplate {
            name: "R1",
            focus: "Coding & Algorithms",
            mins: 60,
            eval: "Correctness, complexity, clarity",
        },
        RoundTemplate {
            name: "R2",
            focus: "System Design",
            mins: 60,
            eval: "Architecture, scalability, trade-offs",
        },
        RoundTemplate {
            name: "R3",
            focus: "Behavioral & Culture Fit",
            mins: 45,
            eval: "Communication, teamwork, ownership",
        },
    ],
    skill_map: &[
        ("Java", Core),
        ("Python", Core),
        ("Go", Core),
        ("Node.js", Core),
        ("SQL", Core),
        ("APIs", Core),
        ("Caching", Core),
        ("Data Structures & Algorithms", Algo),
        ("System Design", System),
        ("Microservices", System),
    ],
};

static FRONTEND: RoleProfile = RoleProfile {
    label: "Frontend Engineer",
    skills: &[
        "JavaScript",
        "TypeScript",
        "React",
        "Vue",
        "Angular",
        "Accessibility",
        "Performance",
        "Testing",
        "CSS",
        "Build Tools",
    ],
    rounds: &[
        RoundTemplate {
            name: "R1",
            focus: "UI Coding Challenge",
            mins: 60,
            eval: "Accuracy, state mgmt, semantics",
        },
        RoundTemplate {
            name: "R2",
            focus: "Frontend Architecture",
            mins: 45,
            eval: "Design patterns, performance, DX",
        },
        RoundTemplate {
            name: "R3",
            focus: "Behavioral & Culture Fit",
            mins: 45,
            eval: "Communication, product thinking",
        },
    ],
    skill_map: &[
        ("JavaScript", Core),
        ("TypeScript", Core),
        ("React", Core),
        ("Vue", Core),
        ("Angular", Core),
        ("CSS", Core),
        ("Build Tools", Core),
        ("Testing", Algo),
        ("Performance", System),
        ("Accessibility", System),
    ],
};

static DATA_SCIENCE: RoleProfile = RoleProfile {
    label: "Data Scientist",
    skills: &[
        "Python",
        "R",
        "SQL",
        "Statistics",
        "ML Modeling",
        "Feature Engineering",
        "Experimentation",
        "Data Visualization",
    ],
    rounds: &[
        RoundTemplate {
            name: "R1",
            focus: "Coding & SQL",
            mins: 45,
            eval: "Correctness, clarity, data handling",
        },
        RoundTemplate {
            name: "R2",
            focus: "Machine Learning Case Study",
            mins: 60,
            eval: "Problem framing, metrics, bias/variance",
        },
        RoundTemplate {
            name: "R3",
            focus: "Behavioral & Stakeholder Comms",
            mins: 45,
            eval: "Communication, trade-offs",
        },
    ],
    skill_map: &[
        ("Python", Core),
        ("R", Core),
        ("SQL", Core),
        ("Feature Engineering", Core),
        ("Data Visualization", Core),
        ("Statistics", Algo),
        ("ML Modeling", System),
        ("Experimentation", System),
    ],
};

static DEVOPS: RoleProfile = RoleProfile {
    label: "DevOps / SRE",
    skills: &[
        "Linux",
        "Networking",
        "Containers",
        "Kubernetes",
        "Observability",
        "CI/CD",
        "Infrastructure as Code",
        "Scripting",
    ],
    rounds: &[
        RoundTemplate {
            name: "R1",
            focus: "Hands-on Troubleshooting",
            mins: 60,
            eval: "Troubleshooting, shell, fundamentals",
        },
        RoundTemplate {
            name: "R2",
            focus: "Infrastructure Design",
            mins: 60,
            eval: "Scalability, HA, trade-offs",
        },
        RoundTemplate {
            name: "R3",
            focus: "On-call & Incident Response",
            mins: 45,
            eval: "Incidents, comms, ownership",
        },
    ],
    skill_map: &[
        ("Linux", Core),
        ("Networking", Core),
        ("Containers", Core),
        ("Scripting", Core),
        ("CI/CD", Algo),
        ("Kubernetes", System),
        ("Observability", System),
        ("Infrastructure as Code", System),
    ],
};

static QA: RoleProfile = RoleProfile {
    label: "QA / Test Engineer",
    skills: &[
        "Test Design",
        "Automation Frameworks",
        "API Testing",
        "Performance Testing",
        "SDET Principles",
        "CI/CD Integration",
    ],
    rounds: &[
        RoundTemplate {
            name: "R1",
            focus: "Automation Coding",
            mins: 60,
            eval: "Design, reliability, maintainability",
        },
        RoundTemplate {
            name: "R2",
            focus: "Test Strategy & Scenarios",
            mins: 45,
            eval: "Coverage, risk, non-functional",
        },
        RoundTemplate {
            name: "R3",
            focus: "Collaboration & Culture",
            mins: 30,
            eval: "Dev collaboration, CI, ownership",
        },
    ],
    skill_map: &[
        ("Test Design", Core),
        ("Automation Frameworks", Core),
        ("API Testing", Core),
        ("SDET Principles", Algo),
        ("Performance Testing", System),
        ("CI/CD Integration", System),
    ],
};
