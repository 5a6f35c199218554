//! Schema validation entry points, one pair per document kind.
//!
//! These operate on raw [`serde_json::Value`]s so callers can inspect
//! violations before (or instead of) deserializing into the typed models.

use openweight_core::ValidationOutcome;
use serde_json::Value;

use crate::registry::{self, schema_store};

fn validate(identity: &str, value: &Value) -> ValidationOutcome {
    schema_store()
        .validate(identity, value)
        .expect("embedded schema is registered")
}

fn is_valid(identity: &str, value: &Value) -> bool {
    schema_store()
        .is_valid(identity, value)
        .expect("embedded schema is registered")
}

/// Validates a workout log, returning every violation.
#[must_use]
pub fn validate_workout_log(value: &Value) -> ValidationOutcome {
    validate(registry::WORKOUT_LOG, value)
}

/// Boolean fast path for [`validate_workout_log`].
#[must_use]
pub fn is_valid_workout_log(value: &Value) -> bool {
    is_valid(registry::WORKOUT_LOG, value)
}

/// Validates a workout template, returning every violation.
#[must_use]
pub fn validate_workout_template(value: &Value) -> ValidationOutcome {
    validate(registry::WORKOUT_TEMPLATE, value)
}

/// Boolean fast path for [`validate_workout_template`].
#[must_use]
pub fn is_valid_workout_template(value: &Value) -> bool {
    is_valid(registry::WORKOUT_TEMPLATE, value)
}

/// Validates a program, returning every violation. Workouts inside each
/// week are checked against the full workout template schema.
#[must_use]
pub fn validate_program(value: &Value) -> ValidationOutcome {
    validate(registry::PROGRAM, value)
}

/// Boolean fast path for [`validate_program`].
#[must_use]
pub fn is_valid_program(value: &Value) -> bool {
    is_valid(registry::PROGRAM, value)
}

/// Validates a lifter profile, returning every violation.
#[must_use]
pub fn validate_lifter_profile(value: &Value) -> ValidationOutcome {
    validate(registry::LIFTER_PROFILE, value)
}

/// Boolean fast path for [`validate_lifter_profile`].
#[must_use]
pub fn is_valid_lifter_profile(value: &Value) -> bool {
    is_valid(registry::LIFTER_PROFILE, value)
}
