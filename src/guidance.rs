use serde::Serialize;

use crate::exercises::ExerciseCatalog;
use crate::models::ExperienceTier;

/// Human-readable guidance derived from an experience tier
///
/// Every field is a pure lookup keyed by tier; only the weekly schedule
/// interpolates the requested frequency. All lookups are total: every tier
/// has a defined, non-empty entry.
#[derive(Debug, Clone, Serialize)]
pub struct TierGuidance {
    /// Why the assessment landed on this tier
    pub explanation: &'static str,

    /// Recommended starting exercises at this tier
    pub starting_exercises: Vec<&'static str>,

    /// Weekly schedule suggestion with the requested frequency filled in
    pub weekly_schedule: String,

    /// What to prioritize at this tier
    pub focus_areas: Vec<&'static str>,

    /// Tier-appropriate safety guidelines
    pub safety_guidelines: Vec<&'static str>,
}

/// Tier-keyed guidance lookups
pub struct GuidanceTables;

impl GuidanceTables {
    /// Assemble the full guidance bundle for a tier and requested frequency
    pub fn for_tier(tier: ExperienceTier, weekly_frequency: u8) -> TierGuidance {
        TierGuidance {
            explanation: Self::explanation(tier),
            starting_exercises: Self::starting_exercises(tier),
            weekly_schedule: Self::weekly_schedule(tier, weekly_frequency),
            focus_areas: Self::focus_areas(tier),
            safety_guidelines: Self::safety_guidelines(tier),
        }
    }

    pub fn explanation(tier: ExperienceTier) -> &'static str {
        match tier {
            ExperienceTier::Beginner => {
                "Your results place you at the beginner tier. You will build a base of \
                 strength and body control with foundational movements before loading \
                 harder variations."
            }
            ExperienceTier::Intermediate => {
                "Your results place you at the intermediate tier. You have a working \
                 strength base and can train full pullups, dips, and unilateral leg \
                 work with meaningful volume."
            }
            ExperienceTier::Advanced => {
                "Your results place you at the advanced tier. You are ready for \
                 high-leverage variations and skill work such as levers, handstands, \
                 and archer progressions."
            }
        }
    }

    pub fn starting_exercises(tier: ExperienceTier) -> Vec<&'static str> {
        ExerciseCatalog::starting_for(tier)
            .into_iter()
            .map(|e| e.name)
            .collect()
    }

    pub fn weekly_schedule(tier: ExperienceTier, weekly_frequency: u8) -> String {
        match tier {
            ExperienceTier::Beginner => format!(
                "{} full-body sessions per week, with at least one rest day between sessions",
                weekly_frequency
            ),
            ExperienceTier::Intermediate => format!(
                "{} sessions per week alternating push/pull emphasis, legs and core twice weekly",
                weekly_frequency
            ),
            ExperienceTier::Advanced => format!(
                "{} sessions per week split by movement pattern, with dedicated skill work first",
                weekly_frequency
            ),
        }
    }

    pub fn focus_areas(tier: ExperienceTier) -> Vec<&'static str> {
        match tier {
            ExperienceTier::Beginner => vec![
                "Consistent technique on foundational movements",
                "Scapular control and hollow-body positioning",
                "Building the habit of regular training",
            ],
            ExperienceTier::Intermediate => vec![
                "Progressive overload through harder variations",
                "Strict pullup and dip volume",
                "Unilateral leg strength",
            ],
            ExperienceTier::Advanced => vec![
                "Straight-arm strength for levers and planche work",
                "Handstand balance and endurance",
                "Managing fatigue across high-frequency training",
            ],
        }
    }

    pub fn safety_guidelines(tier: ExperienceTier) -> Vec<&'static str> {
        match tier {
            ExperienceTier::Beginner => vec![
                "Stop a set when form breaks down rather than grinding reps",
                "Warm up wrists and shoulders before every session",
                "Expect soreness, not joint pain; back off if joints hurt",
            ],
            ExperienceTier::Intermediate => vec![
                "Add harder variations one at a time",
                "Keep at least one full rest day per week",
                "Condition elbows gradually before high pulling volume",
            ],
            ExperienceTier::Advanced => vec![
                "Treat skill work as practice, never to failure",
                "Deload every fourth or fifth week",
                "Prepare connective tissue before maximal-leverage holds",
            ],
        }
    }
}
