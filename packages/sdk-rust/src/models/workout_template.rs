//! Typed model for the workout template document: a planned session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{self, Exercise, WeightUnit};

/// A planned workout with target sets and reps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Day of the week this workout is planned for, 1 (Monday) through 7.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_weekday"
    )]
    pub day: Option<u8>,
    pub exercises: Vec<ExerciseTemplate>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A planned exercise with its target sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplate {
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
    pub sets: Vec<SetTemplate>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A target set: prescribed reps, load, and intensity.
///
/// Load may be absolute (`target_weight` plus `unit`) or relative
/// (`percentage` plus `percentage_of`); the schema ties each pair together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTemplate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub target_reps: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub target_reps_min: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub target_reps_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,
    /// Percentage of a reference lift, 0 to 200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// What the percentage is relative to, e.g. `1RM` or `training max`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_of: Option<String>,
    #[serde(rename = "targetRPE", default, skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f64>,
    #[serde(
        rename = "targetRIR",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub target_rir: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "common::optional_integer"
    )]
    pub rest_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_percentage_based_prescription() {
        let template: WorkoutTemplate = serde_json::from_value(json!({
            "name": "Week 1 Day 1",
            "day": 1,
            "exercises": [{
                "exercise": { "name": "Bench Press" },
                "sets": [
                    { "targetReps": 5, "percentage": 75, "percentageOf": "1RM", "targetRPE": 7 }
                ]
            }]
        }))
        .unwrap();
        let set = &template.exercises[0].sets[0];
        assert_eq!(set.percentage, Some(75.0));
        assert_eq!(set.percentage_of.as_deref(), Some("1RM"));
        assert_eq!(set.target_rpe, Some(7.0));
    }

    #[test]
    fn whole_floats_fill_integer_fields() {
        let template: WorkoutTemplate = serde_json::from_value(json!({
            "name": "Day 3",
            "day": 3.0,
            "exercises": [{
                "exercise": { "name": "Row" },
                "sets": [{ "targetReps": 10.0 }]
            }]
        }))
        .unwrap();
        assert_eq!(template.day, Some(3));
        assert_eq!(template.exercises[0].sets[0].target_reps, Some(10));
    }

    #[test]
    fn rpe_and_rir_use_uppercase_suffixes_on_the_wire() {
        let set = SetTemplate {
            target_rpe: Some(8.0),
            target_rir: Some(2),
            ..SetTemplate::default()
        };
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({ "targetRPE": 8.0, "targetRIR": 2 })
        );
    }
}
