use calrs::assessment::{check_divergence, AssessmentEngine, SimpleClassifier};
use calrs::guidance::GuidanceTables;
use calrs::models::{AssessmentInput, ExperienceTier, PriorTraining, TrainingGoal};
use calrs::parameters::ParameterTables;
use calrs::program::ProgramGenerator;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

/// Integration tests covering the full assessment-to-program workflow

fn input(
    pushups: u32,
    pullups: u32,
    plank_seconds: u32,
    prior: &[PriorTraining],
    goal: TrainingGoal,
    weekly_frequency: u8,
) -> AssessmentInput {
    AssessmentInput {
        pushups,
        pullups,
        plank_seconds,
        prior_training: prior.iter().copied().collect(),
        goal,
        weekly_frequency,
    }
}

/// Upper-boundary case: every factor at its maximum
#[test]
fn test_upper_boundary_is_advanced_at_full_score() {
    let i = input(
        20,
        8,
        90,
        &[PriorTraining::Bodyweight],
        TrainingGoal::Strength,
        5,
    );
    assert!(i.validate().is_ok());

    let result = AssessmentEngine::assess(&i);
    assert_eq!(result.score, dec!(3.6));
    assert_eq!(result.maximum, dec!(3.6));
    assert_eq!(result.percentage, dec!(100));
    assert_eq!(result.tier, ExperienceTier::Advanced);
}

/// Lower-boundary case: every factor at zero
#[test]
fn test_lower_boundary_is_beginner_at_zero_score() {
    let i = input(0, 0, 0, &[], TrainingGoal::GeneralFitness, 2);
    assert!(i.validate().is_ok());

    let result = AssessmentEngine::assess(&i);
    assert_eq!(result.percentage, dec!(0));
    assert_eq!(result.tier, ExperienceTier::Beginner);
}

/// Full workflow: assess, derive guidance, derive parameters, build a week
#[test]
fn test_assessment_to_program_workflow() {
    let i = input(
        15,
        5,
        60,
        &[PriorTraining::Weightlifting],
        TrainingGoal::MuscleGain,
        4,
    );
    i.validate().unwrap();

    let assessment = AssessmentEngine::assess(&i);
    let guidance = GuidanceTables::for_tier(assessment.tier, i.weekly_frequency);
    let outline =
        ProgramGenerator::generate(assessment.tier, i.goal, i.weekly_frequency).unwrap();

    assert!(!guidance.starting_exercises.is_empty());
    assert!(guidance.weekly_schedule.starts_with('4'));
    assert_eq!(outline.sessions.len(), 4);
    assert_eq!(
        outline.parameters,
        ParameterTables::adjusted_parameters(assessment.tier, i.goal)
    );
}

/// Every tier has defined, non-empty guidance and parameter entries
#[test]
fn test_derived_lookups_are_total() {
    for tier in ExperienceTier::all() {
        let guidance = GuidanceTables::for_tier(tier, 3);
        assert!(!guidance.explanation.is_empty());
        assert!(!guidance.starting_exercises.is_empty());
        assert!(!guidance.weekly_schedule.is_empty());
        assert!(!guidance.focus_areas.is_empty());
        assert!(!guidance.safety_guidelines.is_empty());

        let params = ParameterTables::level_parameters(tier);
        assert!(params.sets.max >= params.sets.min);
        assert!(params.rest_seconds.strength > 0);
    }
}

/// The two classification schemes disagree on some inputs; that disagreement
/// is reported, not reconciled.
#[test]
fn test_divergent_schemes_are_surfaced() {
    let i = input(0, 13, 0, &[], TrainingGoal::GeneralFitness, 2);

    let divergence = check_divergence(&i).expect("schemes should disagree on 13 pullups alone");
    assert_eq!(divergence.weighted, ExperienceTier::Beginner);
    assert_eq!(divergence.simple, ExperienceTier::Intermediate);

    // Each scheme still stands by its own answer.
    assert_eq!(AssessmentEngine::assess(&i).tier, ExperienceTier::Beginner);
    assert_eq!(SimpleClassifier::classify(&i), ExperienceTier::Intermediate);
}

fn arb_prior() -> impl Strategy<Value = BTreeSet<PriorTraining>> {
    proptest::collection::btree_set(
        prop_oneof![
            Just(PriorTraining::Bodyweight),
            Just(PriorTraining::Gymnastics),
            Just(PriorTraining::Weightlifting),
            Just(PriorTraining::TeamSports),
            Just(PriorTraining::Yoga),
        ],
        0..=3,
    )
}

fn arb_goal() -> impl Strategy<Value = TrainingGoal> {
    prop_oneof![
        Just(TrainingGoal::GeneralFitness),
        Just(TrainingGoal::WeightLoss),
        Just(TrainingGoal::Endurance),
        Just(TrainingGoal::MuscleGain),
        Just(TrainingGoal::Strength),
        Just(TrainingGoal::SkillWork),
    ]
}

proptest! {
    /// The tier is always one of exactly three values, and the percentage
    /// stays within 0-100
    #[test]
    fn prop_tier_is_always_defined(
        pushups in 0u32..200,
        pullups in 0u32..60,
        plank in 0u32..600,
        prior in arb_prior(),
        goal in arb_goal(),
        frequency in 2u8..=6,
    ) {
        let i = AssessmentInput {
            pushups,
            pullups,
            plank_seconds: plank,
            prior_training: prior,
            goal,
            weekly_frequency: frequency,
        };
        let result = AssessmentEngine::assess(&i);
        prop_assert!(ExperienceTier::all().contains(&result.tier));
        prop_assert!(result.percentage >= dec!(0));
        prop_assert!(result.percentage <= dec!(100));
    }

    /// Increasing any strength metric never decreases the percentage
    #[test]
    fn prop_score_is_monotonic_in_strength_metrics(
        pushups in 0u32..100,
        pullups in 0u32..30,
        plank in 0u32..300,
        bump in 1u32..50,
        prior in arb_prior(),
        goal in arb_goal(),
        frequency in 2u8..=6,
    ) {
        let base = AssessmentInput {
            pushups,
            pullups,
            plank_seconds: plank,
            prior_training: prior,
            goal,
            weekly_frequency: frequency,
        };
        let base_pct = AssessmentEngine::assess(&base).percentage;

        let mut more_pushups = base.clone();
        more_pushups.pushups += bump;
        prop_assert!(AssessmentEngine::assess(&more_pushups).percentage >= base_pct);

        let mut more_pullups = base.clone();
        more_pullups.pullups += bump;
        prop_assert!(AssessmentEngine::assess(&more_pullups).percentage >= base_pct);

        let mut longer_plank = base.clone();
        longer_plank.plank_seconds += bump;
        prop_assert!(AssessmentEngine::assess(&longer_plank).percentage >= base_pct);
    }

    /// Pure function: identical input always yields identical output
    #[test]
    fn prop_assessment_is_deterministic(
        pushups in 0u32..200,
        pullups in 0u32..60,
        plank in 0u32..600,
        prior in arb_prior(),
        goal in arb_goal(),
        frequency in 2u8..=6,
    ) {
        let i = AssessmentInput {
            pushups,
            pullups,
            plank_seconds: plank,
            prior_training: prior,
            goal,
            weekly_frequency: frequency,
        };
        prop_assert_eq!(AssessmentEngine::assess(&i), AssessmentEngine::assess(&i));
    }

    /// Program generation succeeds for every tier/goal/frequency combination
    /// and honors the requested frequency
    #[test]
    fn prop_program_generation_is_total_over_valid_inputs(
        goal in arb_goal(),
        frequency in 2u8..=6,
    ) {
        for tier in ExperienceTier::all() {
            let outline = ProgramGenerator::generate(tier, goal, frequency).unwrap();
            prop_assert_eq!(outline.sessions.len(), frequency as usize);
            for session in &outline.sessions {
                prop_assert!(session.reps.min >= 1);
                prop_assert!(session.rest_seconds > 0);
            }
        }
    }
}
