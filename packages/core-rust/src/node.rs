//! The constraint tree: the recursive data model every schema document is
//! compiled into.
//!
//! A [`ConstraintNode`] is either a [`Reference`] to another node (local
//! definition or external document) or an [`InlineNode`] carrying the actual
//! constraints. The two are mutually exclusive by construction: a node that is
//! a reference carries nothing else, and resolution must happen before any
//! constraint on it is applied.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use regex::Regex;
use serde_json::Value;

/// Primitive type names a constraint can declare.
///
/// `Integer` is a subtype of `Number`: a numeric instance with zero
/// fractional part satisfies both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
}

impl PrimitiveType {
    /// Parses a JSON Schema type name. Returns `None` for anything outside
    /// the supported set (including `"null"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// The canonical lowercase name, as it appears in schema text.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Whether `value`'s runtime type satisfies this declared type.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::Number => value.is_number(),
            Self::Integer => {
                value.as_i64().is_some()
                    || value.as_u64().is_some()
                    || value.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The runtime type name of a JSON value, used in violation messages.
#[must_use]
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_f64() && n.as_f64().is_some_and(|f| f.fract() != 0.0) {
                "number"
            } else {
                "integer"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A pointer from one constraint node to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `#/definitions/<name>` into the current document's definitions map.
    Local(String),
    /// A bare document identity, resolved against the schema store.
    /// Always points at the root of the target document.
    External(String),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(name) => write!(f, "#/definitions/{name}"),
            Self::External(identity) => f.write_str(identity),
        }
    }
}

/// Normalizes a `$id` or external `$ref` string to a bare document identity.
///
/// Strips any URL path prefix and the `.schema.json` suffix, so
/// `https://openweight.org/schemas/workout-template.schema.json`,
/// `workout-template.schema.json`, and `workout-template` all map to the
/// same identity.
#[must_use]
pub fn document_identity(raw: &str) -> String {
    let tail = raw.rsplit('/').next().unwrap_or(raw);
    let tail = tail.strip_suffix(".schema.json").unwrap_or(tail);
    tail.to_string()
}

/// Item-count bounds for array instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayBounds {
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

/// Character-count bounds for string instances. Lengths count Unicode
/// scalar values, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringBounds {
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
}

/// Inclusive value bounds for numeric instances.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberBounds {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

/// An `if-present(condition) => require(consequence)` rule, evaluated
/// against the same object instance as the node that carries it.
///
/// The rule triggers only when *all* condition properties are present;
/// it then requires every consequence property. Rules on a node are
/// independent of each other and ANDed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRule {
    /// Property names that must all be present for the rule to trigger.
    pub condition: BTreeSet<String>,
    /// Property names that become required once the rule triggers.
    pub consequence: BTreeSet<String>,
}

/// One inline schema fragment: every constraint a node can carry directly.
///
/// All fields are optional; an empty `InlineNode` accepts any instance.
#[derive(Debug, Clone, Default)]
pub struct InlineNode {
    /// Accepted primitive types. Absent means any type is accepted.
    pub declared_types: Option<BTreeSet<PrimitiveType>>,
    /// Child constraints per property name. Properties present in the
    /// instance but not declared here are permitted and ignored.
    pub properties: BTreeMap<String, ConstraintNode>,
    /// Property names that must be present on object instances.
    pub required: BTreeSet<String>,
    /// Constraint applied to every element of array instances.
    pub items: Option<Box<ConstraintNode>>,
    pub array_bounds: Option<ArrayBounds>,
    pub string_bounds: Option<StringBounds>,
    pub number_bounds: Option<NumberBounds>,
    /// Allowed literal values, compared by JSON equality.
    pub enumeration: Option<Vec<Value>>,
    /// Compiled string pattern. Compilation happens at document load time,
    /// so evaluation never sees an invalid pattern.
    pub pattern: Option<Regex>,
    /// Semantic format tag (`date-time`, ...). Advisory only; carried for
    /// consumers but not validated by the evaluator.
    pub format: Option<String>,
    /// Conditional requiredness rules, evaluated in order and ANDed.
    pub rules: Vec<ConditionalRule>,
}

/// One node of a compiled schema tree: a reference or an inline fragment.
#[derive(Debug, Clone)]
pub enum ConstraintNode {
    /// Pure pointer; resolution replaces it before any constraint applies.
    Reference(Reference),
    /// Inline constraints applied directly to the instance.
    Inline(Box<InlineNode>),
}

impl ConstraintNode {
    /// Convenience constructor for an inline node.
    #[must_use]
    pub fn inline(node: InlineNode) -> Self {
        Self::Inline(Box::new(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_is_subtype_of_number() {
        assert!(PrimitiveType::Number.matches(&json!(5)));
        assert!(PrimitiveType::Integer.matches(&json!(5)));
        assert!(PrimitiveType::Number.matches(&json!(5.5)));
        assert!(!PrimitiveType::Integer.matches(&json!(5.5)));
    }

    #[test]
    fn float_with_zero_fraction_satisfies_integer() {
        assert!(PrimitiveType::Integer.matches(&json!(5.0)));
    }

    #[test]
    fn null_matches_no_primitive_type() {
        let null = Value::Null;
        for ty in [
            PrimitiveType::Object,
            PrimitiveType::Array,
            PrimitiveType::String,
            PrimitiveType::Number,
            PrimitiveType::Integer,
            PrimitiveType::Boolean,
        ] {
            assert!(!ty.matches(&null), "{ty} should not match null");
        }
    }

    #[test]
    fn from_name_rejects_unknown_types() {
        assert_eq!(PrimitiveType::from_name("string"), Some(PrimitiveType::String));
        assert_eq!(PrimitiveType::from_name("null"), None);
        assert_eq!(PrimitiveType::from_name("Object"), None);
    }

    #[test]
    fn value_type_names() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(3)), "integer");
        assert_eq!(value_type_name(&json!(3.5)), "number");
        assert_eq!(value_type_name(&json!("x")), "string");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }

    #[test]
    fn document_identity_strips_url_and_suffix() {
        assert_eq!(
            document_identity("https://openweight.org/schemas/workout-log.schema.json"),
            "workout-log"
        );
        assert_eq!(
            document_identity("workout-template.schema.json"),
            "workout-template"
        );
        assert_eq!(document_identity("program"), "program");
    }

    #[test]
    fn reference_display() {
        assert_eq!(
            Reference::Local("SetLog".to_string()).to_string(),
            "#/definitions/SetLog"
        );
        assert_eq!(
            Reference::External("workout-template".to_string()).to_string(),
            "workout-template"
        );
    }
}
