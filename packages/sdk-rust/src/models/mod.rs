//! Typed models for the four `OpenWeight` document kinds.
//!
//! The models are open-world: fields outside the core vocabulary land in
//! each struct's `extra` map and survive a parse/serialize round trip
//! untouched. Constraints that serde cannot express (conditional
//! requiredness, ranges, patterns) are enforced by schema validation before
//! deserialization, not by the types here.

pub mod common;
pub mod lifter_profile;
pub mod program;
pub mod workout_log;
pub mod workout_template;

pub use common::{DistanceUnit, Exercise, WeightUnit};
pub use lifter_profile::{
    Bodyweight, BodyweightEntry, DurationPr, E1RmFormula, Estimated1Rm, ExerciseRecord, Height,
    HeightUnit, LifterProfile, LiftScores, NormalizedScores, RepMax, RepMaxType, Sex, VolumePr,
};
pub use program::{Program, ProgramWeek};
pub use workout_log::{ExerciseLog, SetLog, WorkoutLog};
pub use workout_template::{ExerciseTemplate, SetTemplate, WorkoutTemplate};
