use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{
    Bounds, ExperienceTier, GoalModifier, RestSeconds, TrainingGoal, TrainingParameters,
};

/// Tier-keyed parameter and goal-modifier lookups
///
/// Pure table lookups with no computation beyond applying a goal modifier.
/// Every tier and every goal has a defined entry.
pub struct ParameterTables;

impl ParameterTables {
    /// Baseline training parameters for a tier
    pub fn level_parameters(tier: ExperienceTier) -> TrainingParameters {
        match tier {
            ExperienceTier::Beginner => TrainingParameters {
                sets: Bounds::new(2, 3),
                reps: Bounds::new(5, 8),
                rest_seconds: RestSeconds {
                    strength: 120,
                    hypertrophy: 90,
                    endurance: 60,
                },
                sessions_per_week: Bounds::new(2, 3),
                exercises_per_session: Bounds::new(4, 5),
            },
            ExperienceTier::Intermediate => TrainingParameters {
                sets: Bounds::new(3, 4),
                reps: Bounds::new(6, 10),
                rest_seconds: RestSeconds {
                    strength: 150,
                    hypertrophy: 90,
                    endurance: 45,
                },
                sessions_per_week: Bounds::new(3, 4),
                exercises_per_session: Bounds::new(5, 6),
            },
            ExperienceTier::Advanced => TrainingParameters {
                sets: Bounds::new(3, 5),
                reps: Bounds::new(8, 12),
                rest_seconds: RestSeconds {
                    strength: 180,
                    hypertrophy: 90,
                    endurance: 30,
                },
                sessions_per_week: Bounds::new(4, 6),
                exercises_per_session: Bounds::new(6, 8),
            },
        }
    }

    /// Per-goal adjustment: additive rep delta, multiplicative rest factor
    pub fn goal_modifier(goal: TrainingGoal) -> GoalModifier {
        match goal {
            TrainingGoal::GeneralFitness => GoalModifier {
                rep_delta: 0,
                rest_multiplier: dec!(1.0),
            },
            TrainingGoal::WeightLoss => GoalModifier {
                rep_delta: 2,
                rest_multiplier: dec!(0.75),
            },
            TrainingGoal::Endurance => GoalModifier {
                rep_delta: 4,
                rest_multiplier: dec!(0.5),
            },
            TrainingGoal::MuscleGain => GoalModifier {
                rep_delta: 2,
                rest_multiplier: dec!(0.9),
            },
            TrainingGoal::Strength => GoalModifier {
                rep_delta: -2,
                rest_multiplier: dec!(1.5),
            },
            TrainingGoal::SkillWork => GoalModifier {
                rep_delta: -1,
                rest_multiplier: dec!(1.25),
            },
        }
    }

    /// Level parameters with the goal modifier applied
    pub fn adjusted_parameters(tier: ExperienceTier, goal: TrainingGoal) -> TrainingParameters {
        let base = Self::level_parameters(tier);
        let modifier = Self::goal_modifier(goal);

        TrainingParameters {
            reps: Bounds::new(
                apply_rep_delta(base.reps.min, modifier.rep_delta),
                apply_rep_delta(base.reps.max, modifier.rep_delta),
            ),
            rest_seconds: RestSeconds {
                strength: apply_rest_multiplier(base.rest_seconds.strength, modifier.rest_multiplier),
                hypertrophy: apply_rest_multiplier(
                    base.rest_seconds.hypertrophy,
                    modifier.rest_multiplier,
                ),
                endurance: apply_rest_multiplier(base.rest_seconds.endurance, modifier.rest_multiplier),
            },
            ..base
        }
    }
}

// Reps never drop below 1 regardless of the delta.
fn apply_rep_delta(reps: u8, delta: i8) -> u8 {
    (i16::from(reps) + i16::from(delta)).clamp(1, i16::from(u8::MAX)) as u8
}

fn apply_rest_multiplier(seconds: u16, multiplier: Decimal) -> u16 {
    (Decimal::from(seconds) * multiplier)
        .round()
        .to_u16()
        .unwrap_or(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_parameters() {
        for tier in ExperienceTier::all() {
            let params = ParameterTables::level_parameters(tier);
            assert!(params.sets.min >= 1);
            assert!(params.sets.min <= params.sets.max);
            assert!(params.reps.min <= params.reps.max);
            assert!(params.sessions_per_week.min <= params.sessions_per_week.max);
            assert!(params.exercises_per_session.min <= params.exercises_per_session.max);
            assert!(params.rest_seconds.strength >= params.rest_seconds.endurance);
        }
    }

    #[test]
    fn test_parameters_scale_with_tier() {
        let beginner = ParameterTables::level_parameters(ExperienceTier::Beginner);
        let advanced = ParameterTables::level_parameters(ExperienceTier::Advanced);

        assert!(advanced.sets.max > beginner.sets.max);
        assert!(advanced.sessions_per_week.max > beginner.sessions_per_week.max);
        assert!(advanced.exercises_per_session.max > beginner.exercises_per_session.max);
    }

    #[test]
    fn test_every_goal_has_modifier() {
        let goals = [
            TrainingGoal::GeneralFitness,
            TrainingGoal::WeightLoss,
            TrainingGoal::Endurance,
            TrainingGoal::MuscleGain,
            TrainingGoal::Strength,
            TrainingGoal::SkillWork,
        ];
        for goal in goals {
            let modifier = ParameterTables::goal_modifier(goal);
            assert!(modifier.rest_multiplier > dec!(0));
        }
    }

    #[test]
    fn test_general_fitness_is_identity() {
        for tier in ExperienceTier::all() {
            assert_eq!(
                ParameterTables::adjusted_parameters(tier, TrainingGoal::GeneralFitness),
                ParameterTables::level_parameters(tier)
            );
        }
    }

    #[test]
    fn test_strength_goal_lowers_reps_and_extends_rest() {
        let base = ParameterTables::level_parameters(ExperienceTier::Intermediate);
        let adjusted =
            ParameterTables::adjusted_parameters(ExperienceTier::Intermediate, TrainingGoal::Strength);

        // reps 6-10 -> 4-8, rest strength 150 -> 225
        assert_eq!(adjusted.reps, Bounds::new(4, 8));
        assert_eq!(adjusted.rest_seconds.strength, 225);
        assert!(adjusted.rest_seconds.endurance > base.rest_seconds.endurance);
        // sets and session structure are untouched by goal modifiers
        assert_eq!(adjusted.sets, base.sets);
        assert_eq!(adjusted.sessions_per_week, base.sessions_per_week);
    }

    #[test]
    fn test_endurance_goal_raises_reps_and_halves_rest() {
        let adjusted =
            ParameterTables::adjusted_parameters(ExperienceTier::Beginner, TrainingGoal::Endurance);

        // reps 5-8 -> 9-12, rest 120/90/60 -> 60/45/30
        assert_eq!(adjusted.reps, Bounds::new(9, 12));
        assert_eq!(adjusted.rest_seconds.strength, 60);
        assert_eq!(adjusted.rest_seconds.hypertrophy, 45);
        assert_eq!(adjusted.rest_seconds.endurance, 30);
    }

    #[test]
    fn test_rep_delta_never_drops_below_one() {
        assert_eq!(apply_rep_delta(2, -5), 1);
        assert_eq!(apply_rep_delta(10, -2), 8);
        assert_eq!(apply_rep_delta(250, 10), 255);
    }
}
