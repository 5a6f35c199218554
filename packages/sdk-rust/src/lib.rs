//! `OpenWeight` SDK — typed models, schema-validated parsing, and
//! serialization for the `OpenWeight` strength-training interchange format.
//!
//! The SDK embeds the four `OpenWeight` schema documents (workout log,
//! workout template, program, lifter profile) and validates with the
//! [`openweight_core`] engine. The three layers can be used independently:
//!
//! - [`validate`] checks raw [`serde_json::Value`]s and reports every
//!   violation with its instance path;
//! - [`parse`] validates first, then deserializes into the typed
//!   [`models`];
//! - [`serialize`] turns models back into interchange JSON.
//!
//! ```
//! let log = openweight_sdk::parse_workout_log(r#"{
//!     "date": "2024-01-15T09:30:00Z",
//!     "exercises": [{
//!         "exercise": { "name": "Back Squat" },
//!         "sets": [{ "reps": 5, "weight": 140.0, "unit": "kg" }]
//!     }]
//! }"#).unwrap();
//! assert_eq!(log.exercises[0].exercise.name, "Back Squat");
//! ```

pub mod models;
pub mod parse;
pub mod registry;
pub mod serialize;
pub mod validate;

pub use models::{
    Bodyweight, BodyweightEntry, DistanceUnit, DurationPr, E1RmFormula, Estimated1Rm, Exercise,
    ExerciseLog, ExerciseRecord, ExerciseTemplate, Height, HeightUnit, LifterProfile, LiftScores,
    NormalizedScores, Program, ProgramWeek, RepMax, RepMaxType, SetLog, SetTemplate, Sex, VolumePr,
    WeightUnit, WorkoutLog, WorkoutTemplate,
};
pub use parse::{
    parse_lifter_profile, parse_program, parse_workout_log, parse_workout_template, ParseError,
};
pub use registry::{
    schema_store, LIFTER_PROFILE_SCHEMA, PROGRAM_SCHEMA, WORKOUT_LOG_SCHEMA,
    WORKOUT_TEMPLATE_SCHEMA,
};
pub use serialize::{
    serialize_lifter_profile, serialize_lifter_profile_pretty, serialize_program,
    serialize_program_pretty, serialize_workout_log, serialize_workout_log_pretty,
    serialize_workout_template, serialize_workout_template_pretty,
};
pub use validate::{
    is_valid_lifter_profile, is_valid_program, is_valid_workout_log, is_valid_workout_template,
    validate_lifter_profile, validate_program, validate_workout_log, validate_workout_template,
};

pub use openweight_core::{InstancePath, PathStep, ValidationOutcome, Violation};
