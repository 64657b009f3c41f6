// Library interface for calrs modules
// This allows integration tests to access the core functionality

pub mod assessment;
pub mod config;
pub mod error;
pub mod exercises;
pub mod guidance;
pub mod logging;
pub mod models;
pub mod parameters;
pub mod program;

// Re-export commonly used types for convenience
pub use models::*;
pub use assessment::{
    check_divergence, Assessment, AssessmentEngine, ClassificationDivergence, FactorScore,
    ScoreFactor, SimpleClassifier,
};
pub use exercises::{Exercise, ExerciseCatalog, ExerciseCategory};
pub use guidance::{GuidanceTables, TierGuidance};
pub use parameters::ParameterTables;
pub use program::{ProgramGenerator, SessionFocus, SessionOutline, WeeklyOutline};
pub use error::{CalrsError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
