//! Translation of JSON Schema Draft-07 text into the compiled constraint
//! tree model.
//!
//! The loader is deliberately narrow: it understands the keyword surface
//! the OpenWeight documents actually use (`type`, `properties`, `required`,
//! `items`, item/length/value bounds, `enum`, `pattern`, `format`, `$ref`,
//! and `allOf` conditional-requiredness entries) and rejects what it cannot
//! faithfully compile. Anything malformed is a construction error at load
//! time — schemas are sanity-checked once, never on the validation path.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use regex::Regex;
use serde_json::{Map, Value};

use crate::document::SchemaDocument;
use crate::error::SchemaError;
use crate::node::{
    document_identity, ArrayBounds, ConditionalRule, ConstraintNode, InlineNode, NumberBounds,
    PrimitiveType, Reference, StringBounds,
};

/// Keywords that make a node an inline constraint. A `$ref` sitting next to
/// any of these is ambiguous (reference nodes carry nothing else) and is
/// rejected at load time.
const CONSTRAINT_KEYWORDS: &[&str] = &[
    "type",
    "properties",
    "required",
    "items",
    "minItems",
    "maxItems",
    "minLength",
    "maxLength",
    "minimum",
    "maximum",
    "enum",
    "pattern",
    "format",
    "allOf",
];

const LOCAL_REF_PREFIX: &str = "#/definitions/";

impl SchemaDocument {
    /// Compiles a parsed Draft-07 schema document.
    ///
    /// The document identity derives from `$id`, with any URL path prefix
    /// and the `.schema.json` suffix stripped.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DocumentConstruction`] for a missing `$id`,
    /// an unsupported or malformed keyword, an uncompilable `pattern`, a
    /// `$ref` with sibling constraints, or a dangling local reference.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaError::construction("#", "schema document must be a JSON object"))?;

        let identity = object
            .get("$id")
            .and_then(Value::as_str)
            .map(document_identity)
            .ok_or_else(|| SchemaError::construction("#", "missing or non-string '$id'"))?;

        let root = compile_node(value, "#")?;

        let mut definitions = BTreeMap::new();
        if let Some(defs) = object.get("definitions") {
            let defs = defs.as_object().ok_or_else(|| {
                SchemaError::construction("#/definitions", "'definitions' must be an object")
            })?;
            for (name, schema) in defs {
                let location = format!("#/definitions/{name}");
                definitions.insert(name.clone(), compile_node(schema, &location)?);
            }
        }

        SchemaDocument::new(identity, root, definitions)
    }
}

impl FromStr for SchemaDocument {
    type Err = SchemaError;

    /// Parses schema text as JSON, then compiles it via
    /// [`SchemaDocument::from_value`].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

/// Compiles one schema fragment into a [`ConstraintNode`].
fn compile_node(value: &Value, location: &str) -> Result<ConstraintNode, SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::construction(location, "schema fragment must be a JSON object"))?;

    if let Some(reference) = object.get("$ref") {
        return compile_reference(reference, object, location);
    }

    let mut node = InlineNode::default();

    if let Some(types) = object.get("type") {
        node.declared_types = Some(compile_types(types, location)?);
    }

    if let Some(properties) = object.get("properties") {
        let properties = properties.as_object().ok_or_else(|| {
            SchemaError::construction(format!("{location}/properties"), "'properties' must be an object")
        })?;
        for (name, child) in properties {
            let child_location = format!("{location}/properties/{name}");
            node.properties
                .insert(name.clone(), compile_node(child, &child_location)?);
        }
    }

    if let Some(required) = object.get("required") {
        node.required = string_set(required, &format!("{location}/required"))?;
    }

    if let Some(items) = object.get("items") {
        // Tuple-form `items` (an array of schemas) is outside the supported
        // surface; every source schema uses the single-schema form.
        if items.is_array() {
            return Err(SchemaError::construction(
                format!("{location}/items"),
                "tuple-form 'items' is not supported",
            ));
        }
        let child = compile_node(items, &format!("{location}/items"))?;
        node.items = Some(Box::new(child));
    }

    node.array_bounds = bounds_u64(object, "minItems", "maxItems", location)?
        .map(|(min_items, max_items)| ArrayBounds { min_items, max_items });
    node.string_bounds = bounds_u64(object, "minLength", "maxLength", location)?
        .map(|(min_length, max_length)| StringBounds { min_length, max_length });
    node.number_bounds = bounds_f64(object, "minimum", "maximum", location)?
        .map(|(minimum, maximum)| NumberBounds { minimum, maximum });

    if let Some(allowed) = object.get("enum") {
        let allowed = allowed.as_array().ok_or_else(|| {
            SchemaError::construction(format!("{location}/enum"), "'enum' must be an array")
        })?;
        node.enumeration = Some(allowed.clone());
    }

    if let Some(pattern) = object.get("pattern") {
        let pattern = pattern.as_str().ok_or_else(|| {
            SchemaError::construction(format!("{location}/pattern"), "'pattern' must be a string")
        })?;
        let compiled = Regex::new(pattern).map_err(|err| {
            SchemaError::construction(format!("{location}/pattern"), format!("invalid pattern: {err}"))
        })?;
        node.pattern = Some(compiled);
    }

    if let Some(format) = object.get("format") {
        let format = format.as_str().ok_or_else(|| {
            SchemaError::construction(format!("{location}/format"), "'format' must be a string")
        })?;
        node.format = Some(format.to_string());
    }

    if let Some(all_of) = object.get("allOf") {
        node.rules = compile_rules(all_of, location)?;
    }

    Ok(ConstraintNode::inline(node))
}

fn compile_reference(
    reference: &Value,
    object: &Map<String, Value>,
    location: &str,
) -> Result<ConstraintNode, SchemaError> {
    let raw = reference.as_str().ok_or_else(|| {
        SchemaError::construction(format!("{location}/$ref"), "'$ref' must be a string")
    })?;

    if let Some(keyword) = CONSTRAINT_KEYWORDS.iter().find(|k| object.contains_key(**k)) {
        return Err(SchemaError::construction(
            location,
            format!("'$ref' cannot be combined with other constraints (found '{keyword}')"),
        ));
    }

    if let Some(fragment) = raw.strip_prefix('#') {
        let name = fragment
            .strip_prefix("/definitions/")
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .ok_or_else(|| {
                SchemaError::construction(
                    format!("{location}/$ref"),
                    format!("unsupported local reference '{raw}': only '{LOCAL_REF_PREFIX}<name>' is supported"),
                )
            })?;
        return Ok(ConstraintNode::Reference(Reference::Local(name.to_string())));
    }

    // External references address whole documents; a trailing fragment
    // would mean external + local composition, which is out of scope.
    if raw.contains('#') {
        return Err(SchemaError::construction(
            format!("{location}/$ref"),
            format!("external reference '{raw}' must not carry a fragment"),
        ));
    }

    Ok(ConstraintNode::Reference(Reference::External(
        document_identity(raw),
    )))
}

fn compile_types(types: &Value, location: &str) -> Result<BTreeSet<PrimitiveType>, SchemaError> {
    let names: Vec<&str> = match types {
        Value::String(name) => vec![name.as_str()],
        Value::Array(entries) => entries
            .iter()
            .map(|entry| {
                entry.as_str().ok_or_else(|| {
                    SchemaError::construction(
                        format!("{location}/type"),
                        "'type' array entries must be strings",
                    )
                })
            })
            .collect::<Result<_, _>>()?,
        _ => {
            return Err(SchemaError::construction(
                format!("{location}/type"),
                "'type' must be a string or an array of strings",
            ))
        }
    };

    let mut set = BTreeSet::new();
    for name in names {
        let ty = PrimitiveType::from_name(name).ok_or_else(|| {
            SchemaError::construction(
                format!("{location}/type"),
                format!("unsupported type name '{name}'"),
            )
        })?;
        set.insert(ty);
    }
    Ok(set)
}

/// Compiles `allOf` into conditional rules. Entries carrying both
/// `if.required` and `then.required` become rules; entries lacking either
/// are ignored (not rejected) per the translation contract.
fn compile_rules(all_of: &Value, location: &str) -> Result<Vec<ConditionalRule>, SchemaError> {
    let entries = all_of.as_array().ok_or_else(|| {
        SchemaError::construction(format!("{location}/allOf"), "'allOf' must be an array")
    })?;

    let mut rules = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let entry_location = format!("{location}/allOf/{index}");
        let Some(entry) = entry.as_object() else {
            return Err(SchemaError::construction(
                entry_location,
                "'allOf' entries must be objects",
            ));
        };

        let condition = entry.get("if").and_then(|v| v.get("required"));
        let consequence = entry.get("then").and_then(|v| v.get("required"));
        let (Some(condition), Some(consequence)) = (condition, consequence) else {
            continue;
        };

        rules.push(ConditionalRule {
            condition: string_set(condition, &format!("{entry_location}/if/required"))?,
            consequence: string_set(consequence, &format!("{entry_location}/then/required"))?,
        });
    }
    Ok(rules)
}

fn string_set(value: &Value, location: &str) -> Result<BTreeSet<String>, SchemaError> {
    let entries = value
        .as_array()
        .ok_or_else(|| SchemaError::construction(location, "expected an array of strings"))?;
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(ToString::to_string)
                .ok_or_else(|| SchemaError::construction(location, "expected an array of strings"))
        })
        .collect()
}

fn bounds_u64(
    object: &Map<String, Value>,
    min_key: &str,
    max_key: &str,
    location: &str,
) -> Result<Option<(Option<u64>, Option<u64>)>, SchemaError> {
    let min = read_u64(object, min_key, location)?;
    let max = read_u64(object, max_key, location)?;
    Ok(if min.is_none() && max.is_none() {
        None
    } else {
        Some((min, max))
    })
}

fn bounds_f64(
    object: &Map<String, Value>,
    min_key: &str,
    max_key: &str,
    location: &str,
) -> Result<Option<(Option<f64>, Option<f64>)>, SchemaError> {
    let min = read_f64(object, min_key, location)?;
    let max = read_f64(object, max_key, location)?;
    Ok(if min.is_none() && max.is_none() {
        None
    } else {
        Some((min, max))
    })
}

fn read_u64(
    object: &Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<Option<u64>, SchemaError> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| {
            SchemaError::construction(
                format!("{location}/{key}"),
                format!("'{key}' must be a non-negative integer"),
            )
        }),
    }
}

fn read_f64(
    object: &Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<Option<f64>, SchemaError> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            SchemaError::construction(
                format!("{location}/{key}"),
                format!("'{key}' must be a number"),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_a_representative_document() {
        let doc = SchemaDocument::from_value(&json!({
            "$id": "https://openweight.org/schemas/workout-template.schema.json",
            "type": "object",
            "required": ["name", "exercises"],
            "properties": {
                "name": { "type": "string", "minLength": 1, "maxLength": 200 },
                "day": { "type": "integer", "minimum": 1, "maximum": 7 },
                "exercises": {
                    "type": "array",
                    "minItems": 1,
                    "items": { "$ref": "#/definitions/ExerciseTemplate" }
                }
            },
            "definitions": {
                "ExerciseTemplate": { "type": "object", "required": ["exercise", "sets"] }
            }
        }))
        .expect("document compiles");

        assert_eq!(doc.identity(), "workout-template");
        assert_eq!(doc.definition_names(), vec!["ExerciseTemplate"]);

        let ConstraintNode::Inline(root) = doc.root() else {
            panic!("root should be inline");
        };
        assert_eq!(root.required.len(), 2);
        assert!(root.properties.contains_key("day"));

        let ConstraintNode::Inline(day) = &root.properties["day"] else {
            panic!("day should be inline");
        };
        let bounds = day.number_bounds.expect("day has number bounds");
        assert_eq!(bounds.minimum, Some(1.0));
        assert_eq!(bounds.maximum, Some(7.0));

        let ConstraintNode::Inline(exercises) = &root.properties["exercises"] else {
            panic!("exercises should be inline");
        };
        assert_eq!(
            exercises.array_bounds,
            Some(ArrayBounds { min_items: Some(1), max_items: None })
        );
        assert!(matches!(
            exercises.items.as_deref(),
            Some(ConstraintNode::Reference(Reference::Local(name))) if name == "ExerciseTemplate"
        ));
    }

    #[test]
    fn type_array_becomes_a_type_set() {
        let doc = SchemaDocument::from_value(&json!({
            "$id": "mixed",
            "type": ["string", "number"]
        }))
        .unwrap();
        let ConstraintNode::Inline(root) = doc.root() else {
            panic!("root should be inline");
        };
        let types = root.declared_types.as_ref().unwrap();
        assert!(types.contains(&PrimitiveType::String));
        assert!(types.contains(&PrimitiveType::Number));
    }

    #[test]
    fn all_of_entries_missing_if_or_then_are_ignored() {
        let doc = SchemaDocument::from_value(&json!({
            "$id": "rules",
            "type": "object",
            "allOf": [
                { "if": { "required": ["weight"] }, "then": { "required": ["unit"] } },
                { "if": { "required": ["distance"] } },
                { "then": { "required": ["other"] } },
                { "description": "free-form entry" }
            ]
        }))
        .expect("partial allOf entries are ignored, not rejected");
        let ConstraintNode::Inline(root) = doc.root() else {
            panic!("root should be inline");
        };
        assert_eq!(root.rules.len(), 1);
        assert!(root.rules[0].condition.contains("weight"));
        assert!(root.rules[0].consequence.contains("unit"));
    }

    #[test]
    fn ref_with_sibling_constraints_is_rejected() {
        let err = SchemaDocument::from_value(&json!({
            "$id": "bad",
            "properties": {
                "entry": { "$ref": "#/definitions/Entry", "type": "object" }
            },
            "definitions": { "Entry": { "type": "object" } }
        }))
        .expect_err("$ref with siblings must fail");
        let msg = err.to_string();
        assert!(msg.contains("cannot be combined"), "got: {msg}");
        assert!(msg.contains("#/properties/entry"), "got: {msg}");
    }

    #[test]
    fn ref_with_title_only_is_still_a_pure_reference() {
        // Annotation keywords are not constraints; they ride along silently.
        let doc = SchemaDocument::from_value(&json!({
            "$id": "annotated",
            "properties": {
                "entry": { "$ref": "#/definitions/Entry", "title": "Entry" }
            },
            "definitions": { "Entry": { "type": "object" } }
        }))
        .expect("annotations next to $ref are fine");
        let ConstraintNode::Inline(root) = doc.root() else {
            panic!("root should be inline");
        };
        assert!(matches!(
            &root.properties["entry"],
            ConstraintNode::Reference(Reference::Local(name)) if name == "Entry"
        ));
    }

    #[test]
    fn external_ref_is_normalized_to_a_document_identity() {
        let doc = SchemaDocument::from_value(&json!({
            "$id": "program",
            "properties": {
                "workouts": {
                    "type": "array",
                    "items": { "$ref": "workout-template.schema.json" }
                }
            }
        }))
        .unwrap();
        let ConstraintNode::Inline(root) = doc.root() else {
            panic!("root should be inline");
        };
        let ConstraintNode::Inline(workouts) = &root.properties["workouts"] else {
            panic!("workouts should be inline");
        };
        assert!(matches!(
            workouts.items.as_deref(),
            Some(ConstraintNode::Reference(Reference::External(identity)))
                if identity == "workout-template"
        ));
    }

    #[test]
    fn unsupported_constructs_are_construction_errors() {
        let missing_id = SchemaDocument::from_value(&json!({ "type": "object" }));
        assert!(missing_id.is_err());

        let null_type = SchemaDocument::from_value(&json!({ "$id": "x", "type": "null" }));
        assert!(null_type.expect_err("null type").to_string().contains("unsupported type name"));

        let bad_pattern =
            SchemaDocument::from_value(&json!({ "$id": "x", "type": "string", "pattern": "[unclosed" }));
        assert!(bad_pattern.expect_err("bad pattern").to_string().contains("invalid pattern"));

        let tuple_items = SchemaDocument::from_value(&json!({
            "$id": "x",
            "type": "array",
            "items": [{ "type": "string" }]
        }));
        assert!(tuple_items.expect_err("tuple items").to_string().contains("tuple-form"));

        let external_fragment = SchemaDocument::from_value(&json!({
            "$id": "x",
            "properties": { "entry": { "$ref": "other.schema.json#/definitions/Inner" } }
        }));
        assert!(external_fragment
            .expect_err("external fragment")
            .to_string()
            .contains("must not carry a fragment"));
    }

    #[test]
    fn dangling_local_reference_fails_at_load_time() {
        let err = SchemaDocument::from_value(&json!({
            "$id": "x",
            "properties": { "entry": { "$ref": "#/definitions/Missing" } }
        }))
        .expect_err("dangling reference");
        assert!(err.to_string().contains("names no definition"));
    }

    #[test]
    fn from_str_distinguishes_json_errors_from_construction_errors() {
        let json_err = "not json".parse::<SchemaDocument>().expect_err("not json");
        assert!(matches!(json_err, SchemaError::Json(_)));

        let construction_err = "{}".parse::<SchemaDocument>().expect_err("no $id");
        assert!(matches!(construction_err, SchemaError::DocumentConstruction { .. }));
    }

    #[test]
    fn format_is_carried_as_advisory_metadata() {
        let doc = SchemaDocument::from_value(&json!({
            "$id": "x",
            "type": "string",
            "format": "date-time"
        }))
        .unwrap();
        let ConstraintNode::Inline(root) = doc.root() else {
            panic!("root should be inline");
        };
        assert_eq!(root.format.as_deref(), Some("date-time"));
    }
}
