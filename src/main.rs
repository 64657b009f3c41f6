use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled};

use calrs::assessment::{check_divergence, AssessmentEngine};
use calrs::config::AppConfig;
use calrs::exercises::{ExerciseCatalog, ExerciseCategory};
use calrs::guidance::{GuidanceTables, TierGuidance};
use calrs::logging::{init_logging, LogLevel};
use calrs::models::{AssessmentInput, ExperienceTier, PriorTraining, TrainingGoal};
use calrs::parameters::ParameterTables;
use calrs::program::ProgramGenerator;

/// calrs - Calisthenics Assessment CLI
///
/// Assesses experience level from fitness-test inputs and derives training
/// parameters, guidance, and weekly program outlines.
#[derive(Parser)]
#[command(name = "calrs")]
#[command(version = "0.1.0")]
#[command(about = "Calisthenics assessment and program parameterization", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the experience-level assessment
    Assess {
        /// Max consecutive pushups
        #[arg(long)]
        pushups: u32,

        /// Max consecutive pullups
        #[arg(long)]
        pullups: u32,

        /// Max plank hold in seconds
        #[arg(long)]
        plank: u32,

        /// Prior-training tags (bodyweight, gymnastics, weights, sports, yoga)
        #[arg(long)]
        prior: Vec<String>,

        /// Primary goal (defaults from config)
        #[arg(long)]
        goal: Option<String>,

        /// Desired sessions per week, 2-6 (defaults from config)
        #[arg(long)]
        frequency: Option<u8>,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show training parameters for a tier, optionally goal-adjusted
    Parameters {
        /// Experience tier (beginner, intermediate, advanced)
        #[arg(long)]
        tier: String,

        /// Goal to adjust for
        #[arg(long)]
        goal: Option<String>,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Generate a weekly program outline
    Program {
        /// Experience tier (beginner, intermediate, advanced)
        #[arg(long)]
        tier: String,

        /// Primary goal
        #[arg(long)]
        goal: String,

        /// Sessions per week, 2-6
        #[arg(long)]
        frequency: u8,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Browse the exercise catalog
    Exercises {
        /// Only exercises accessible at this tier
        #[arg(long)]
        tier: Option<String>,

        /// Only exercises in this category
        #[arg(long)]
        category: Option<String>,

        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Everything `assess` produces, for JSON output
#[derive(Serialize)]
struct AssessmentReport {
    assessment: calrs::assessment::Assessment,
    guidance: TierGuidance,
    parameters: calrs::models::TrainingParameters,
}

#[derive(Tabled)]
struct FactorRow {
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

#[derive(Tabled)]
struct ParameterRow {
    #[tabled(rename = "Parameter")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct SessionRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Focus")]
    focus: String,
    #[tabled(rename = "Exercises")]
    exercises: String,
    #[tabled(rename = "Sets x Reps")]
    sets_reps: String,
    #[tabled(rename = "Rest (s)")]
    rest: String,
}

#[derive(Tabled)]
struct ExerciseRow {
    #[tabled(rename = "Exercise")]
    name: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Progression")]
    progression: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load(&config_path)?;

    let mut log_config = config.logging.clone();
    if cli.verbose > 0 {
        log_config.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&log_config)?;

    match cli.command {
        Commands::Assess {
            pushups,
            pullups,
            plank,
            prior,
            goal,
            frequency,
            json,
        } => {
            let goal = match goal {
                Some(g) => TrainingGoal::from_str(&g)?,
                None => config.defaults.goal,
            };
            let weekly_frequency = frequency.unwrap_or(config.defaults.weekly_frequency);
            let prior_training = prior
                .iter()
                .map(|t| PriorTraining::from_str(t))
                .collect::<Result<_>>()?;

            let input = AssessmentInput {
                pushups,
                pullups,
                plank_seconds: plank,
                prior_training,
                goal,
                weekly_frequency,
            };
            if let Err(e) = input.validate() {
                anyhow::bail!(e.user_message());
            }

            let assessment = AssessmentEngine::assess(&input);
            let guidance = GuidanceTables::for_tier(assessment.tier, weekly_frequency);
            let parameters = ParameterTables::adjusted_parameters(assessment.tier, goal);

            if let Some(divergence) = check_divergence(&input) {
                tracing::warn!(%divergence, "Classification schemes disagree on this input");
                if !json {
                    eprintln!(
                        "{} {}",
                        "note:".yellow().bold(),
                        format!("{}", divergence).yellow()
                    );
                }
            }

            if json {
                let report = AssessmentReport {
                    assessment,
                    guidance,
                    parameters,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_assessment(&assessment, &guidance);
            }
        }

        Commands::Parameters { tier, goal, json } => {
            let tier = ExperienceTier::from_str(&tier)?;
            let params = match goal {
                Some(g) => ParameterTables::adjusted_parameters(tier, TrainingGoal::from_str(&g)?),
                None => ParameterTables::level_parameters(tier),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&params)?);
            } else {
                println!("{}", format!("Training parameters: {}", tier).bold());
                print_parameters(&params);
            }
        }

        Commands::Program {
            tier,
            goal,
            frequency,
            json,
        } => {
            let tier = ExperienceTier::from_str(&tier)?;
            let goal = TrainingGoal::from_str(&goal)?;
            let outline = ProgramGenerator::generate(tier, goal, frequency)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                println!(
                    "{}",
                    format!("Weekly outline: {} / {}", outline.tier, outline.goal).bold()
                );
                let rows: Vec<SessionRow> = outline
                    .sessions
                    .iter()
                    .map(|s| SessionRow {
                        day: s.day.clone(),
                        focus: s.focus.to_string(),
                        exercises: s.exercises.to_string(),
                        sets_reps: format!("{} x {}", s.sets, s.reps),
                        rest: s.rest_seconds.to_string(),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Exercises {
            tier,
            category,
            json,
        } => {
            let tier = tier.map(|t| ExperienceTier::from_str(&t)).transpose()?;
            let category = category
                .map(|c| ExerciseCategory::from_str(&c))
                .transpose()?;

            let exercises: Vec<_> = match category {
                Some(cat) => ExerciseCatalog::by_category(cat, tier),
                None => match tier {
                    Some(t) => ExerciseCatalog::for_tier(t),
                    None => ExerciseCatalog::all().iter().collect(),
                },
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&exercises)?);
            } else {
                let rows: Vec<ExerciseRow> = exercises
                    .iter()
                    .map(|e| ExerciseRow {
                        name: e.name,
                        category: e.category.to_string(),
                        tier: e.min_tier.to_string(),
                        progression: e.progression.unwrap_or("-"),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Config { init } => {
            if init && !config_path.exists() {
                let mut fresh = AppConfig::default();
                fresh.save(&config_path)?;
                println!(
                    "{} {}",
                    "Wrote default config to".green(),
                    config_path.display()
                );
            } else {
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn print_assessment(assessment: &calrs::assessment::Assessment, guidance: &TierGuidance) {
    let tier_label = match assessment.tier {
        ExperienceTier::Beginner => assessment.tier.label().cyan().bold(),
        ExperienceTier::Intermediate => assessment.tier.label().blue().bold(),
        ExperienceTier::Advanced => assessment.tier.label().green().bold(),
    };
    println!(
        "Experience level: {} ({}%)",
        tier_label,
        assessment.percentage.round_dp(1)
    );

    let rows: Vec<FactorRow> = assessment
        .factors
        .iter()
        .map(|f| FactorRow {
            factor: f.factor.to_string(),
            bucket: format!("{}/{}", f.bucket, f.bucket_max),
            weight: f.weight.to_string(),
            contribution: format!("{}/{}", f.contribution, f.maximum),
        })
        .collect();
    println!("{}", Table::new(rows));

    println!("\n{}", guidance.explanation);
    println!("\n{}", "Weekly schedule".bold());
    println!("  {}", guidance.weekly_schedule);
    println!("\n{}", "Starting exercises".bold());
    for name in &guidance.starting_exercises {
        println!("  - {}", name);
    }
    println!("\n{}", "Focus areas".bold());
    for area in &guidance.focus_areas {
        println!("  - {}", area);
    }
    println!("\n{}", "Safety guidelines".bold());
    for line in &guidance.safety_guidelines {
        println!("  - {}", line);
    }
}

fn print_parameters(params: &calrs::models::TrainingParameters) {
    let rows = vec![
        ParameterRow {
            name: "Sets per exercise",
            value: params.sets.to_string(),
        },
        ParameterRow {
            name: "Reps per set",
            value: params.reps.to_string(),
        },
        ParameterRow {
            name: "Rest (strength)",
            value: format!("{}s", params.rest_seconds.strength),
        },
        ParameterRow {
            name: "Rest (hypertrophy)",
            value: format!("{}s", params.rest_seconds.hypertrophy),
        },
        ParameterRow {
            name: "Rest (endurance)",
            value: format!("{}s", params.rest_seconds.endurance),
        },
        ParameterRow {
            name: "Sessions per week",
            value: params.sessions_per_week.to_string(),
        },
        ParameterRow {
            name: "Exercises per session",
            value: params.exercises_per_session.to_string(),
        },
    ];
    println!("{}", Table::new(rows));
}
