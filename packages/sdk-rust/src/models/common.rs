//! Types shared across the `OpenWeight` document models.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reads an integer-typed field, accepting whole floats.
///
/// The schemas treat a number with zero fractional part as an integer
/// (`5.0` satisfies `"type": "integer"`), and producers such as Python's
/// `json.dumps` emit whole floats routinely. Deserialization into the
/// typed models has to accept the same values the schemas accept.
pub(crate) fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    whole_number(&Value::deserialize(deserializer)?)
}

/// Optional variant of [`integer`].
pub(crate) fn optional_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) => whole_number(&value).map(Some),
        None => Ok(None),
    }
}

/// [`optional_integer`] narrowed to a day-of-week slot.
pub(crate) fn optional_weekday<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u8>, D::Error> {
    match optional_integer(deserializer)? {
        Some(n) => u8::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("day {n} is out of range"))),
        None => Ok(None),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number<E: de::Error>(value: &Value) -> Result<u64, E> {
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    if let Some(f) = value.as_f64() {
        if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
            return Ok(f as u64);
        }
    }
    Err(E::custom(format!(
        "expected a whole non-negative number, got {value}"
    )))
}

/// Unit for weight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// Unit for distance values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    M,
    Km,
    Ft,
    Mi,
    Yd,
}

/// Describes which exercise a log entry or template slot refers to.
///
/// Exercises are matched by name; `equipment` and `category` are free-form
/// hints, not a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscles_worked: Option<Vec<String>>,
    /// Producer extensions outside the core vocabulary, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
