//! Typed model for the lifter profile document: biometrics and records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{self, Exercise, WeightUnit};

/// A lifter's profile: biometrics, bodyweight history, and per-exercise
/// records, as exported at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifterProfile {
    /// When this profile was exported (RFC 3339 date-time).
    pub exported_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodyweight: Option<Bodyweight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodyweight_history: Option<Vec<BodyweightEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<ExerciseRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_scores: Option<NormalizedScores>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    In,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Height {
    pub value: f64,
    pub unit: HeightUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bodyweight {
    pub value: f64,
    pub unit: WeightUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyweightEntry {
    pub value: f64,
    pub unit: WeightUnit,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// All records for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub exercise: Exercise,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_maxes: Option<Vec<RepMax>>,
    #[serde(rename = "estimated1RM", default, skip_serializing_if = "Option::is_none")]
    pub estimated_1rm: Option<Estimated1Rm>,
    #[serde(rename = "volumePR", default, skip_serializing_if = "Option::is_none")]
    pub volume_pr: Option<VolumePr>,
    #[serde(rename = "durationPR", default, skip_serializing_if = "Option::is_none")]
    pub duration_pr: Option<DurationPr>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Whether a rep max was actually lifted or derived from another set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepMaxType {
    Actual,
    Estimated,
}

/// The best weight lifted for a given rep count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepMax {
    #[serde(deserialize_with = "common::integer")]
    pub reps: u64,
    pub weight: f64,
    pub unit: WeightUnit,
    pub date: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RepMaxType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodyweight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One-rep-max estimation formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum E1RmFormula {
    Brzycki,
    Epley,
    Lombardi,
    Mayhew,
    Oconner,
    Wathan,
}

/// An estimated one-rep max and the set it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimated1Rm {
    pub value: f64,
    pub unit: WeightUnit,
    pub formula: E1RmFormula,
    #[serde(deserialize_with = "common::integer")]
    pub based_on_reps: u64,
    pub based_on_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Highest total volume (weight times reps) in a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePr {
    pub value: f64,
    pub unit: WeightUnit,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Longest hold or carry, optionally under load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationPr {
    #[serde(deserialize_with = "common::integer")]
    pub seconds: u64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Bodyweight-normalized strength scores for one lift or the total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wilks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dots: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipf_gl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossbrenner: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squat: Option<LiftScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench: Option<LiftScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadlift: Option<LiftScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<LiftScores>,
}
