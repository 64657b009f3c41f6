use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ExperienceTier;

/// Movement categories for the calisthenics catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Push,
    Pull,
    Core,
    Legs,
    Skill,
}

impl ExerciseCategory {
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "push" => Ok(Self::Push),
            "pull" => Ok(Self::Pull),
            "core" => Ok(Self::Core),
            "legs" => Ok(Self::Legs),
            "skill" => Ok(Self::Skill),
            _ => anyhow::bail!("Unknown exercise category: {}", s),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Core => "Core",
            Self::Legs => "Legs",
            Self::Skill => "Skill",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub category: ExerciseCategory,

    /// Lowest tier the exercise is appropriate for
    pub min_tier: ExperienceTier,

    /// Whether this is a recommended starting exercise at its tier
    pub starter: bool,

    /// Next harder variation, where one exists
    pub progression: Option<&'static str>,
}

/// Static calisthenics exercise catalog with tier/category filters
pub struct ExerciseCatalog;

const CATALOG: &[Exercise] = &[
    Exercise {
        name: "Incline Pushup",
        category: ExerciseCategory::Push,
        min_tier: ExperienceTier::Beginner,
        starter: true,
        progression: Some("Pushup"),
    },
    Exercise {
        name: "Pushup",
        category: ExerciseCategory::Push,
        min_tier: ExperienceTier::Beginner,
        starter: true,
        progression: Some("Diamond Pushup"),
    },
    Exercise {
        name: "Bodyweight Squat",
        category: ExerciseCategory::Legs,
        min_tier: ExperienceTier::Beginner,
        starter: true,
        progression: Some("Bulgarian Split Squat"),
    },
    Exercise {
        name: "Ring Row",
        category: ExerciseCategory::Pull,
        min_tier: ExperienceTier::Beginner,
        starter: true,
        progression: Some("Pullup"),
    },
    Exercise {
        name: "Plank",
        category: ExerciseCategory::Core,
        min_tier: ExperienceTier::Beginner,
        starter: true,
        progression: Some("Hollow Body Hold"),
    },
    Exercise {
        name: "Diamond Pushup",
        category: ExerciseCategory::Push,
        min_tier: ExperienceTier::Intermediate,
        starter: true,
        progression: Some("Pseudo Planche Pushup"),
    },
    Exercise {
        name: "Pullup",
        category: ExerciseCategory::Pull,
        min_tier: ExperienceTier::Intermediate,
        starter: true,
        progression: Some("Archer Pullup"),
    },
    Exercise {
        name: "Dip",
        category: ExerciseCategory::Push,
        min_tier: ExperienceTier::Intermediate,
        starter: true,
        progression: Some("Ring Dip"),
    },
    Exercise {
        name: "Bulgarian Split Squat",
        category: ExerciseCategory::Legs,
        min_tier: ExperienceTier::Intermediate,
        starter: true,
        progression: Some("Pistol Squat"),
    },
    Exercise {
        name: "Hollow Body Hold",
        category: ExerciseCategory::Core,
        min_tier: ExperienceTier::Intermediate,
        starter: true,
        progression: Some("Dragon Flag"),
    },
    Exercise {
        name: "Hanging Leg Raise",
        category: ExerciseCategory::Core,
        min_tier: ExperienceTier::Intermediate,
        starter: false,
        progression: Some("Toes to Bar"),
    },
    Exercise {
        name: "Archer Pullup",
        category: ExerciseCategory::Pull,
        min_tier: ExperienceTier::Advanced,
        starter: true,
        progression: Some("One-Arm Pullup"),
    },
    Exercise {
        name: "Pseudo Planche Pushup",
        category: ExerciseCategory::Push,
        min_tier: ExperienceTier::Advanced,
        starter: true,
        progression: Some("Planche Pushup"),
    },
    Exercise {
        name: "Pistol Squat",
        category: ExerciseCategory::Legs,
        min_tier: ExperienceTier::Advanced,
        starter: true,
        progression: None,
    },
    Exercise {
        name: "Dragon Flag",
        category: ExerciseCategory::Core,
        min_tier: ExperienceTier::Advanced,
        starter: true,
        progression: None,
    },
    Exercise {
        name: "Muscle-Up",
        category: ExerciseCategory::Skill,
        min_tier: ExperienceTier::Advanced,
        starter: false,
        progression: None,
    },
    Exercise {
        name: "Handstand",
        category: ExerciseCategory::Skill,
        min_tier: ExperienceTier::Advanced,
        starter: true,
        progression: Some("Handstand Pushup"),
    },
    Exercise {
        name: "Front Lever Tuck",
        category: ExerciseCategory::Skill,
        min_tier: ExperienceTier::Advanced,
        starter: false,
        progression: Some("Front Lever"),
    },
];

impl ExerciseCatalog {
    /// Every exercise in the catalog
    pub fn all() -> &'static [Exercise] {
        CATALOG
    }

    /// Exercises accessible at a tier (its own entries plus everything below)
    pub fn for_tier(tier: ExperienceTier) -> Vec<&'static Exercise> {
        CATALOG.iter().filter(|e| e.min_tier <= tier).collect()
    }

    /// Exercises in a category, optionally capped at a tier
    pub fn by_category(
        category: ExerciseCategory,
        tier: Option<ExperienceTier>,
    ) -> Vec<&'static Exercise> {
        CATALOG
            .iter()
            .filter(|e| e.category == category)
            .filter(|e| tier.map_or(true, |t| e.min_tier <= t))
            .collect()
    }

    /// Recommended starting exercises at exactly this tier
    pub fn starting_for(tier: ExperienceTier) -> Vec<&'static Exercise> {
        CATALOG
            .iter()
            .filter(|e| e.starter && e.min_tier == tier)
            .collect()
    }
}
