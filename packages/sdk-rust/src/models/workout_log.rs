//! Typed model for the workout log document: a completed training session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{self, DistanceUnit, Exercise, WeightUnit};

/// A completed strength training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// When the session took place (RFC 3339 date-time).
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub duration_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub exercises: Vec<ExerciseLog>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A single exercise performed within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    pub exercise: Exercise,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub order: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub superset_id: Option<u64>,
    pub sets: Vec<SetLog>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A single set within an exercise.
///
/// Every field is optional on its own; a weight only makes sense with a
/// unit, and a distance with a distance unit, which the schema enforces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLog {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub reps: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub duration_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Rating of perceived exertion, 0 to 10 in half-point steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Reps in reserve.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub rir: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_failure: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub rest_seconds: Option<u64>,
    /// Four-phase tempo notation, e.g. `3-1-1-0` or `3-1-X-0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
