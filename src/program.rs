use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CalrsError, Result};
use crate::models::{Bounds, ExperienceTier, TrainingGoal, TrainingParameters};
use crate::parameters::ParameterTables;

/// Emphasis of a single session within the weekly outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionFocus {
    FullBody,
    PushEmphasis,
    PullEmphasis,
    LegsAndCore,
    SkillWork,
}

impl SessionFocus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::PushEmphasis => "Push Emphasis",
            Self::PullEmphasis => "Pull Emphasis",
            Self::LegsAndCore => "Legs & Core",
            Self::SkillWork => "Skill Work",
        }
    }
}

impl fmt::Display for SessionFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One planned session in the weekly outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutline {
    /// Day of week, Monday-first
    pub day: String,

    pub focus: SessionFocus,

    /// Exercises to program this session
    pub exercises: Bounds,

    /// Working sets per exercise
    pub sets: Bounds,

    /// Goal-adjusted rep target per set
    pub reps: Bounds,

    /// Rest between sets in seconds, for the goal's intensity mode
    pub rest_seconds: u16,
}

/// A week of sessions parameterized by tier, goal, and frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOutline {
    pub tier: ExperienceTier,
    pub goal: TrainingGoal,

    /// Goal-adjusted parameters the sessions were built from
    pub parameters: TrainingParameters,

    pub sessions: Vec<SessionOutline>,
}

const DAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekly program outline generator
///
/// The in-repo consumer of the goal modifiers: combines the goal-adjusted
/// level parameters with the requested frequency to lay sessions out across
/// the week, rest days spread between them.
pub struct ProgramGenerator;

impl ProgramGenerator {
    /// Build a weekly outline for a tier, goal, and frequency (2-6)
    pub fn generate(
        tier: ExperienceTier,
        goal: TrainingGoal,
        weekly_frequency: u8,
    ) -> Result<WeeklyOutline> {
        if !(2..=6).contains(&weekly_frequency) {
            return Err(CalrsError::Validation {
                field: "weekly_frequency".to_string(),
                reason: format!("must be between 2 and 6, got {}", weekly_frequency),
            });
        }

        let parameters = ParameterTables::adjusted_parameters(tier, goal);
        let rest_seconds = Self::rest_for_goal(goal, &parameters);

        let sessions = Self::training_days(weekly_frequency)
            .iter()
            .enumerate()
            .map(|(index, &day)| SessionOutline {
                day: DAY_LABELS[day].to_string(),
                focus: Self::session_focus(tier, goal, index),
                exercises: parameters.exercises_per_session,
                sets: parameters.sets,
                reps: parameters.reps,
                rest_seconds,
            })
            .collect();

        Ok(WeeklyOutline {
            tier,
            goal,
            parameters,
            sessions,
        })
    }

    // Training-day layouts keep rest days between sessions where possible.
    fn training_days(weekly_frequency: u8) -> &'static [usize] {
        match weekly_frequency {
            2 => &[0, 3],
            3 => &[0, 2, 4],
            4 => &[0, 1, 3, 5],
            5 => &[0, 1, 2, 4, 5],
            _ => &[0, 1, 2, 3, 4, 5],
        }
    }

    /// Session emphasis by tier, goal, and position in the week
    fn session_focus(tier: ExperienceTier, goal: TrainingGoal, index: usize) -> SessionFocus {
        // Beginners train full body every session regardless of goal.
        if tier == ExperienceTier::Beginner {
            return SessionFocus::FullBody;
        }

        // Advanced skill-goal weeks lead with dedicated skill sessions.
        if tier == ExperienceTier::Advanced && goal == TrainingGoal::SkillWork && index == 0 {
            return SessionFocus::SkillWork;
        }

        match index % 3 {
            0 => SessionFocus::PushEmphasis,
            1 => SessionFocus::PullEmphasis,
            _ => SessionFocus::LegsAndCore,
        }
    }

    /// Rest recommendation for the goal's dominant intensity mode
    fn rest_for_goal(goal: TrainingGoal, parameters: &TrainingParameters) -> u16 {
        match goal {
            TrainingGoal::Strength | TrainingGoal::SkillWork => parameters.rest_seconds.strength,
            TrainingGoal::MuscleGain | TrainingGoal::GeneralFitness | TrainingGoal::WeightLoss => {
                parameters.rest_seconds.hypertrophy
            }
            TrainingGoal::Endurance => parameters.rest_seconds.endurance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_count_matches_frequency() {
        for freq in 2..=6u8 {
            let outline = ProgramGenerator::generate(
                ExperienceTier::Intermediate,
                TrainingGoal::GeneralFitness,
                freq,
            )
            .unwrap();
            assert_eq!(outline.sessions.len(), freq as usize);
        }
    }

    #[test]
    fn test_frequency_out_of_range_is_rejected() {
        assert!(
            ProgramGenerator::generate(ExperienceTier::Beginner, TrainingGoal::Strength, 1)
                .is_err()
        );
        assert!(
            ProgramGenerator::generate(ExperienceTier::Beginner, TrainingGoal::Strength, 7)
                .is_err()
        );
    }

    #[test]
    fn test_beginner_sessions_are_full_body() {
        let outline =
            ProgramGenerator::generate(ExperienceTier::Beginner, TrainingGoal::MuscleGain, 3)
                .unwrap();
        assert!(outline
            .sessions
            .iter()
            .all(|s| s.focus == SessionFocus::FullBody));
    }

    #[test]
    fn test_intermediate_sessions_rotate_emphasis() {
        let outline =
            ProgramGenerator::generate(ExperienceTier::Intermediate, TrainingGoal::Strength, 3)
                .unwrap();
        let focuses: Vec<_> = outline.sessions.iter().map(|s| s.focus).collect();
        assert_eq!(
            focuses,
            vec![
                SessionFocus::PushEmphasis,
                SessionFocus::PullEmphasis,
                SessionFocus::LegsAndCore,
            ]
        );
    }

    #[test]
    fn test_advanced_skill_goal_leads_with_skill_session() {
        let outline =
            ProgramGenerator::generate(ExperienceTier::Advanced, TrainingGoal::SkillWork, 4)
                .unwrap();
        assert_eq!(outline.sessions[0].focus, SessionFocus::SkillWork);
    }

    #[test]
    fn test_sessions_carry_goal_adjusted_parameters() {
        let outline =
            ProgramGenerator::generate(ExperienceTier::Intermediate, TrainingGoal::Endurance, 3)
                .unwrap();

        // Endurance: reps 6-10 -> 10-14, endurance rest 45 -> 22 (rounded)
        assert_eq!(outline.parameters.reps, Bounds::new(10, 14));
        for session in &outline.sessions {
            assert_eq!(session.reps, outline.parameters.reps);
            assert_eq!(session.rest_seconds, outline.parameters.rest_seconds.endurance);
        }
    }

    #[test]
    fn test_two_day_layout_spreads_rest_days() {
        let outline =
            ProgramGenerator::generate(ExperienceTier::Beginner, TrainingGoal::GeneralFitness, 2)
                .unwrap();
        assert_eq!(outline.sessions[0].day, "Monday");
        assert_eq!(outline.sessions[1].day, "Thursday");
    }
}
