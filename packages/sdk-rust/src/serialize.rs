//! Serialization of typed models back to interchange JSON.
//!
//! The typed models only hold states the schemas accept (plus open-world
//! extras), so serialization needs no validation pass. Compact output is
//! the interchange default; pretty output is for files meant to be read.

use serde::Serialize;

use crate::models::{LifterProfile, Program, WorkoutLog, WorkoutTemplate};

fn to_compact<T: Serialize>(model: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(model)
}

fn to_pretty<T: Serialize>(model: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(model)
}

/// Serializes a workout log to compact JSON.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if a value cannot be
/// represented as JSON (a non-finite float in an `extra` map, in practice).
pub fn serialize_workout_log(log: &WorkoutLog) -> Result<String, serde_json::Error> {
    to_compact(log)
}

/// Serializes a workout log to pretty-printed JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_workout_log_pretty(log: &WorkoutLog) -> Result<String, serde_json::Error> {
    to_pretty(log)
}

/// Serializes a workout template to compact JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_workout_template(
    template: &WorkoutTemplate,
) -> Result<String, serde_json::Error> {
    to_compact(template)
}

/// Serializes a workout template to pretty-printed JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_workout_template_pretty(
    template: &WorkoutTemplate,
) -> Result<String, serde_json::Error> {
    to_pretty(template)
}

/// Serializes a program to compact JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_program(program: &Program) -> Result<String, serde_json::Error> {
    to_compact(program)
}

/// Serializes a program to pretty-printed JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_program_pretty(program: &Program) -> Result<String, serde_json::Error> {
    to_pretty(program)
}

/// Serializes a lifter profile to compact JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_lifter_profile(profile: &LifterProfile) -> Result<String, serde_json::Error> {
    to_compact(profile)
}

/// Serializes a lifter profile to pretty-printed JSON.
///
/// # Errors
///
/// Same contract as [`serialize_workout_log`].
pub fn serialize_lifter_profile_pretty(
    profile: &LifterProfile,
) -> Result<String, serde_json::Error> {
    to_pretty(profile)
}
