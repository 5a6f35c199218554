//! Validated parsing: JSON text to typed models.
//!
//! Parsing is a two-step pipeline: the text is read into a
//! [`serde_json::Value`], validated against the matching embedded schema,
//! and only then deserialized into the typed model. Documents that fail
//! validation never reach deserialization, so conditional constraints the
//! type system cannot express are enforced before a model exists.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use openweight_core::Violation;

use crate::models::{LifterProfile, Program, WorkoutLog, WorkoutTemplate};
use crate::registry::{self, schema_store};

/// Why a document could not be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was not well-formed JSON, or the validated value did not
    /// fit the typed model.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The document is well-formed JSON but violates its schema.
    #[error("document failed schema validation with {} violation(s)", violations.len())]
    Validation { violations: Vec<Violation> },
}

fn parse<T: DeserializeOwned>(identity: &str, input: &str) -> Result<T, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    let outcome = schema_store()
        .validate(identity, &value)
        .expect("embedded schema is registered");
    if !outcome.valid {
        tracing::debug!(
            identity = %identity,
            count = outcome.violations.len(),
            "document rejected by schema validation"
        );
        return Err(ParseError::Validation {
            violations: outcome.violations,
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Parses and validates a workout log document.
///
/// # Errors
///
/// Returns [`ParseError::Json`] on malformed JSON and
/// [`ParseError::Validation`] with the full violation list when the
/// document does not satisfy the workout log schema.
pub fn parse_workout_log(input: &str) -> Result<WorkoutLog, ParseError> {
    parse(registry::WORKOUT_LOG, input)
}

/// Parses and validates a workout template document.
///
/// # Errors
///
/// Same contract as [`parse_workout_log`], against the workout template
/// schema.
pub fn parse_workout_template(input: &str) -> Result<WorkoutTemplate, ParseError> {
    parse(registry::WORKOUT_TEMPLATE, input)
}

/// Parses and validates a program document, including every embedded
/// workout template.
///
/// # Errors
///
/// Same contract as [`parse_workout_log`], against the program schema.
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    parse(registry::PROGRAM, input)
}

/// Parses and validates a lifter profile document.
///
/// # Errors
///
/// Same contract as [`parse_workout_log`], against the lifter profile
/// schema.
pub fn parse_lifter_profile(input: &str) -> Result<LifterProfile, ParseError> {
    parse(registry::LIFTER_PROFILE, input)
}
