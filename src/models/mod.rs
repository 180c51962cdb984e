pub mod plan;
pub mod session;

pub use plan::{ExerciseKind, ProgressionPlan, ProgressionRequest, RepRange, WeekEntry};
pub use session::{SessionInput, SessionRecord, ValidatedSession, Volume};
