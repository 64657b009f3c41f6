use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{AssessmentInput, ExperienceTier, PriorTraining, TrainingGoal};

/// Factor weights for the weighted-bucket scoring model
const STRENGTH_WEIGHT: Decimal = dec!(0.4);
const BACKGROUND_WEIGHT: Decimal = dec!(0.3);
const FREQUENCY_WEIGHT: Decimal = dec!(0.2);
const GOAL_WEIGHT: Decimal = dec!(0.1);

/// Percentage thresholds mapping the final score to a tier
const ADVANCED_THRESHOLD: Decimal = dec!(70);
const INTERMEDIATE_THRESHOLD: Decimal = dec!(40);

/// Scoring factors contributing to the weighted assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    /// Combined pushup/pullup/plank sub-scores (40%)
    Strength,
    /// Prior-training background (30%)
    Background,
    /// Stated weekly frequency (20%)
    Frequency,
    /// Complexity of the stated goal (10%)
    GoalComplexity,
}

impl ScoreFactor {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Background => "Background",
            Self::Frequency => "Frequency",
            Self::GoalComplexity => "Goal Complexity",
        }
    }
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One factor's contribution to the weighted score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: ScoreFactor,

    /// Bucket value earned (0-6 for strength, 0-2 otherwise)
    pub bucket: u8,

    /// Maximum bucket value for this factor
    pub bucket_max: u8,

    /// Factor weight
    pub weight: Decimal,

    /// bucket * weight
    pub contribution: Decimal,

    /// bucket_max * weight
    pub maximum: Decimal,
}

/// Full assessment result: tier plus the per-factor breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub tier: ExperienceTier,

    /// Final percentage (score / maximum * 100)
    pub percentage: Decimal,

    /// Weighted score across all factors
    pub score: Decimal,

    /// Weighted maximum across all factors
    pub maximum: Decimal,

    /// Per-factor contributions, in factor order
    pub factors: Vec<FactorScore>,
}

/// Weighted multi-factor assessment engine
///
/// Pure and total over its input domain: every input produces a tier, and
/// identical inputs always produce identical output. Range validation is the
/// caller's job ([`AssessmentInput::validate`]).
pub struct AssessmentEngine;

impl AssessmentEngine {
    /// Run the weighted assessment and return the tier with its breakdown
    pub fn assess(input: &AssessmentInput) -> Assessment {
        let factors = vec![
            Self::factor_score(
                ScoreFactor::Strength,
                Self::strength_score(input),
                6,
                STRENGTH_WEIGHT,
            ),
            Self::factor_score(
                ScoreFactor::Background,
                Self::background_bucket(&input.prior_training),
                2,
                BACKGROUND_WEIGHT,
            ),
            Self::factor_score(
                ScoreFactor::Frequency,
                Self::frequency_bucket(input.weekly_frequency),
                2,
                FREQUENCY_WEIGHT,
            ),
            Self::factor_score(
                ScoreFactor::GoalComplexity,
                Self::goal_bucket(input.goal),
                2,
                GOAL_WEIGHT,
            ),
        ];

        let score: Decimal = factors.iter().map(|f| f.contribution).sum();
        let maximum: Decimal = factors.iter().map(|f| f.maximum).sum();
        let percentage = score / maximum * dec!(100);

        Assessment {
            tier: Self::tier_for_percentage(percentage),
            percentage,
            score,
            maximum,
            factors,
        }
    }

    /// Map a final percentage to its tier
    pub fn tier_for_percentage(percentage: Decimal) -> ExperienceTier {
        if percentage >= ADVANCED_THRESHOLD {
            ExperienceTier::Advanced
        } else if percentage >= INTERMEDIATE_THRESHOLD {
            ExperienceTier::Intermediate
        } else {
            ExperienceTier::Beginner
        }
    }

    fn factor_score(factor: ScoreFactor, bucket: u8, bucket_max: u8, weight: Decimal) -> FactorScore {
        FactorScore {
            factor,
            bucket,
            bucket_max,
            weight,
            contribution: Decimal::from(bucket) * weight,
            maximum: Decimal::from(bucket_max) * weight,
        }
    }

    /// Strength sub-scores summed (0-6)
    ///
    /// Each metric buckets into 0/1/2 via two fixed thresholds:
    /// - pushups: <10, 10-19, 20+
    /// - pullups: <3, 3-7, 8+
    /// - plank:   <30s, 30-89s, 90s+
    pub fn strength_score(input: &AssessmentInput) -> u8 {
        Self::pushup_bucket(input.pushups)
            + Self::pullup_bucket(input.pullups)
            + Self::plank_bucket(input.plank_seconds)
    }

    pub fn pushup_bucket(pushups: u32) -> u8 {
        if pushups >= 20 {
            2
        } else if pushups >= 10 {
            1
        } else {
            0
        }
    }

    pub fn pullup_bucket(pullups: u32) -> u8 {
        if pullups >= 8 {
            2
        } else if pullups >= 3 {
            1
        } else {
            0
        }
    }

    pub fn plank_bucket(plank_seconds: u32) -> u8 {
        if plank_seconds >= 90 {
            2
        } else if plank_seconds >= 30 {
            1
        } else {
            0
        }
    }

    /// Prior-training background bucket (0-2)
    ///
    /// Bodyweight or gymnastics background transfers directly; any other
    /// training history counts for partial credit.
    pub fn background_bucket(tags: &BTreeSet<PriorTraining>) -> u8 {
        if tags.contains(&PriorTraining::Bodyweight) || tags.contains(&PriorTraining::Gymnastics) {
            2
        } else if !tags.is_empty() {
            1
        } else {
            0
        }
    }

    /// Weekly-frequency commitment bucket (0-2): <3, 3-4, 5+
    pub fn frequency_bucket(weekly_frequency: u8) -> u8 {
        if weekly_frequency >= 5 {
            2
        } else if weekly_frequency >= 3 {
            1
        } else {
            0
        }
    }

    /// Goal-complexity bucket (0-2)
    pub fn goal_bucket(goal: TrainingGoal) -> u8 {
        match goal {
            TrainingGoal::GeneralFitness | TrainingGoal::WeightLoss => 0,
            TrainingGoal::Endurance | TrainingGoal::MuscleGain => 1,
            TrainingGoal::Strength | TrainingGoal::SkillWork => 2,
        }
    }
}

/// Simple averaged-bucket classifier ported alongside the weighted engine
///
/// Uses its own criteria ladder; notably the pullup ladder (5-12 reps for the
/// middle bucket) does not match the weighted engine's (3-7 reps). The two
/// schemes can therefore disagree on the same raw input. That divergence is
/// deliberate and surfaced via [`check_divergence`], never reconciled here.
pub struct SimpleClassifier;

impl SimpleClassifier {
    /// Classify by averaging the three strength buckets and rounding
    pub fn classify(input: &AssessmentInput) -> ExperienceTier {
        let sum = Decimal::from(
            Self::pushup_bucket(input.pushups)
                + Self::pullup_bucket(input.pullups)
                + Self::plank_bucket(input.plank_seconds),
        );
        let avg = (sum / dec!(3)).round();

        if avg >= dec!(2) {
            ExperienceTier::Advanced
        } else if avg >= dec!(1) {
            ExperienceTier::Intermediate
        } else {
            ExperienceTier::Beginner
        }
    }

    fn pushup_bucket(pushups: u32) -> u8 {
        if pushups >= 20 {
            2
        } else if pushups >= 10 {
            1
        } else {
            0
        }
    }

    // Different ladder from the weighted engine's pullup bucketing.
    fn pullup_bucket(pullups: u32) -> u8 {
        if pullups > 12 {
            2
        } else if pullups >= 5 {
            1
        } else {
            0
        }
    }

    fn plank_bucket(plank_seconds: u32) -> u8 {
        if plank_seconds >= 90 {
            2
        } else if plank_seconds >= 30 {
            1
        } else {
            0
        }
    }
}

/// Disagreement between the weighted engine and the simple classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDivergence {
    pub weighted: ExperienceTier,
    pub simple: ExperienceTier,
}

impl fmt::Display for ClassificationDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weighted engine says {}, simple classifier says {}",
            self.weighted, self.simple
        )
    }
}

/// Run both classification schemes and report any disagreement
pub fn check_divergence(input: &AssessmentInput) -> Option<ClassificationDivergence> {
    let weighted = AssessmentEngine::assess(input).tier;
    let simple = SimpleClassifier::classify(input);
    if weighted != simple {
        Some(ClassificationDivergence { weighted, simple })
    } else {
        None
    }
}
