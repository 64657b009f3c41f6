use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::CalrsError;

/// Experience tiers used throughout the assessment and program tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceTier {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => anyhow::bail!("Unknown experience tier: {}", s),
        }
    }

    /// All tiers, in ascending order of experience
    pub fn all() -> [ExperienceTier; 3] {
        [Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary training goals a user can state during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    GeneralFitness,
    WeightLoss,
    Endurance,
    MuscleGain,
    Strength,
    SkillWork,
}

impl TrainingGoal {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "general" | "general_fitness" | "general-fitness" => Ok(Self::GeneralFitness),
            "weight_loss" | "weight-loss" | "fat_loss" => Ok(Self::WeightLoss),
            "endurance" => Ok(Self::Endurance),
            "muscle" | "muscle_gain" | "muscle-gain" | "hypertrophy" => Ok(Self::MuscleGain),
            "strength" => Ok(Self::Strength),
            "skill" | "skill_work" | "skills" => Ok(Self::SkillWork),
            _ => anyhow::bail!("Unknown training goal: {}", s),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GeneralFitness => "General Fitness",
            Self::WeightLoss => "Weight Loss",
            Self::Endurance => "Endurance",
            Self::MuscleGain => "Muscle Gain",
            Self::Strength => "Strength",
            Self::SkillWork => "Skill Work",
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prior-training backgrounds a user can tag during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorTraining {
    Bodyweight,
    Gymnastics,
    Weightlifting,
    TeamSports,
    Yoga,
}

impl PriorTraining {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bodyweight" | "calisthenics" => Ok(Self::Bodyweight),
            "gymnastics" => Ok(Self::Gymnastics),
            "weights" | "weightlifting" | "gym" => Ok(Self::Weightlifting),
            "sports" | "team_sports" | "team-sports" => Ok(Self::TeamSports),
            "yoga" => Ok(Self::Yoga),
            _ => anyhow::bail!("Unknown prior-training tag: {}", s),
        }
    }
}

/// Raw onboarding-assessment inputs, constructed once per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Max consecutive pushups
    pub pushups: u32,

    /// Max consecutive pullups
    pub pullups: u32,

    /// Max plank hold in seconds
    pub plank_seconds: u32,

    /// Prior-training background tags
    pub prior_training: BTreeSet<PriorTraining>,

    /// Primary stated goal
    pub goal: TrainingGoal,

    /// Desired training sessions per week (2-6)
    pub weekly_frequency: u8,
}

impl AssessmentInput {
    /// Caller-side range validation. The scoring engine itself is total and
    /// never errors; this is the gate the CLI applies before invoking it.
    pub fn validate(&self) -> Result<(), CalrsError> {
        if !(2..=6).contains(&self.weekly_frequency) {
            return Err(CalrsError::Validation {
                field: "weekly_frequency".to_string(),
                reason: format!("must be between 2 and 6, got {}", self.weekly_frequency),
            });
        }
        if self.pushups > 500 {
            return Err(CalrsError::Validation {
                field: "pushups".to_string(),
                reason: format!("implausible count: {}", self.pushups),
            });
        }
        if self.pullups > 200 {
            return Err(CalrsError::Validation {
                field: "pullups".to_string(),
                reason: format!("implausible count: {}", self.pullups),
            });
        }
        if self.plank_seconds > 3600 {
            return Err(CalrsError::Validation {
                field: "plank_seconds".to_string(),
                reason: format!("implausible hold: {} seconds", self.plank_seconds),
            });
        }
        Ok(())
    }
}

/// Inclusive min/max bounds for a training parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u8,
    pub max: u8,
}

impl Bounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Rest recommendations in seconds, by intensity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestSeconds {
    /// Heavy strength work (low reps, near-maximal effort)
    pub strength: u16,

    /// Hypertrophy-focused work (moderate reps)
    pub hypertrophy: u16,

    /// Endurance/conditioning work (high reps, short rest)
    pub endurance: u16,
}

/// Numeric training parameters derived from an experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingParameters {
    /// Working sets per exercise
    pub sets: Bounds,

    /// Target reps per set
    pub reps: Bounds,

    /// Rest between sets, by intensity mode
    pub rest_seconds: RestSeconds,

    /// Recommended sessions per week
    pub sessions_per_week: Bounds,

    /// Exercises per session
    pub exercises_per_session: Bounds,
}

/// Per-goal adjustment applied downstream to training parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalModifier {
    /// Additive adjustment to the rep range
    pub rep_delta: i8,

    /// Multiplicative adjustment to rest durations
    pub rest_multiplier: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> AssessmentInput {
        AssessmentInput {
            pushups: 15,
            pullups: 5,
            plank_seconds: 60,
            prior_training: BTreeSet::new(),
            goal: TrainingGoal::GeneralFitness,
            weekly_frequency: 3,
        }
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!(
            ExperienceTier::from_str("beginner").unwrap(),
            ExperienceTier::Beginner
        );
        assert_eq!(
            ExperienceTier::from_str("Advanced").unwrap(),
            ExperienceTier::Advanced
        );
        assert!(ExperienceTier::from_str("elite").is_err());
    }

    #[test]
    fn test_goal_parsing_aliases() {
        assert_eq!(
            TrainingGoal::from_str("general_fitness").unwrap(),
            TrainingGoal::GeneralFitness
        );
        assert_eq!(
            TrainingGoal::from_str("hypertrophy").unwrap(),
            TrainingGoal::MuscleGain
        );
        assert_eq!(
            TrainingGoal::from_str("skill").unwrap(),
            TrainingGoal::SkillWork
        );
        assert!(TrainingGoal::from_str("powerlifting").is_err());
    }

    #[test]
    fn test_prior_training_parsing() {
        assert_eq!(
            PriorTraining::from_str("calisthenics").unwrap(),
            PriorTraining::Bodyweight
        );
        assert_eq!(
            PriorTraining::from_str("gym").unwrap(),
            PriorTraining::Weightlifting
        );
        assert!(PriorTraining::from_str("crossfit").is_err());
    }

    #[test]
    fn test_input_validation_accepts_plausible_values() {
        assert!(base_input().validate().is_ok());
    }

    #[test]
    fn test_input_validation_frequency_bounds() {
        let mut input = base_input();
        input.weekly_frequency = 1;
        assert!(input.validate().is_err());

        input.weekly_frequency = 7;
        assert!(input.validate().is_err());

        input.weekly_frequency = 2;
        assert!(input.validate().is_ok());
        input.weekly_frequency = 6;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_validation_rejects_implausible_counts() {
        let mut input = base_input();
        input.pushups = 501;
        assert!(input.validate().is_err());

        let mut input = base_input();
        input.pullups = 201;
        assert!(input.validate().is_err());

        let mut input = base_input();
        input.plank_seconds = 3601;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_bounds_display() {
        assert_eq!(Bounds::new(3, 5).to_string(), "3-5");
        assert_eq!(Bounds::new(4, 4).to_string(), "4");
    }

    #[test]
    fn test_input_serialization_round_trip() {
        let mut input = base_input();
        input.prior_training.insert(PriorTraining::Bodyweight);
        input.prior_training.insert(PriorTraining::Yoga);

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"goal\":\"general_fitness\""));
        assert!(json.contains("\"bodyweight\""));

        let back: AssessmentInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
