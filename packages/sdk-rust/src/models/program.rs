//! Typed model for the program document: weeks of planned workouts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::workout_template::WorkoutTemplate;

/// A structured training program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub weeks: Vec<ProgramWeek>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A week of training within a program. Each workout is a full
/// [`WorkoutTemplate`], the same shape as a standalone template document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramWeek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub workouts: Vec<WorkoutTemplate>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
