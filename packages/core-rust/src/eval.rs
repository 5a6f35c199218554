//! The constraint evaluator: recursive, conjunctive validation of a JSON
//! value against a compiled schema tree.
//!
//! Evaluation is a pure, synchronous, depth-first walk. Violations
//! accumulate; nothing short-circuits except the two documented stops
//! (type mismatch and failed reference resolution, both of which make
//! further descent meaningless). Malformed *instances* are never errors —
//! "the data does not match" is the expected, common outcome and is
//! reported through [`ValidationOutcome`].

use serde_json::Value;

use crate::document::SchemaDocument;
use crate::node::{value_type_name, ConstraintNode, InlineNode};
use crate::outcome::{PathStep, ValidationOutcome, Violation};
use crate::resolve::resolve_node;
use crate::store::SchemaStore;

/// Collects violations during one evaluation pass.
///
/// In fail-fast mode (the `is_valid` path) the first violation saturates
/// the sink and the walk unwinds early; no contract depends on the partial
/// list, which is discarded.
struct Sink {
    violations: Vec<Violation>,
    fail_fast: bool,
}

impl Sink {
    fn emit(&mut self, path: &[PathStep], message: String) {
        self.violations.push(Violation::new(path, message));
    }

    fn saturated(&self) -> bool {
        self.fail_fast && !self.violations.is_empty()
    }
}

/// Walks JSON values against schema documents held in a [`SchemaStore`].
///
/// Stateless per call: the evaluator borrows the read-only store, so one
/// evaluator (or many) can serve concurrent validation calls.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'s> {
    store: &'s SchemaStore,
}

impl<'s> Evaluator<'s> {
    #[must_use]
    pub fn new(store: &'s SchemaStore) -> Self {
        Self { store }
    }

    /// Validates `value` against `document`, reporting every
    /// independently-failing constraint reachable without an early stop.
    ///
    /// The violation order is deterministic: depth-first, declared
    /// properties (in name order) before required checks, array items in
    /// index order, conditional rules after structural checks.
    #[must_use]
    pub fn evaluate(&self, value: &Value, document: &SchemaDocument) -> ValidationOutcome {
        let mut sink = Sink {
            violations: Vec::new(),
            fail_fast: false,
        };
        let mut path = Vec::new();
        self.eval_node(value, document.root(), document, &mut path, &mut sink);
        ValidationOutcome::from_violations(sink.violations)
    }

    /// Boolean fast path, semantically equal to `evaluate(..).valid` but
    /// allowed to stop at the first violation.
    #[must_use]
    pub fn is_valid(&self, value: &Value, document: &SchemaDocument) -> bool {
        let mut sink = Sink {
            violations: Vec::new(),
            fail_fast: true,
        };
        let mut path = Vec::new();
        self.eval_node(value, document.root(), document, &mut path, &mut sink);
        sink.violations.is_empty()
    }

    fn eval_node(
        &self,
        value: &Value,
        node: &ConstraintNode,
        document: &SchemaDocument,
        path: &mut Vec<PathStep>,
        sink: &mut Sink,
    ) {
        // Resolution first. A failed resolution is one violation at this
        // path; sibling branches of the instance keep being checked so the
        // caller sees the whole picture in a single pass.
        let resolved = match resolve_node(self.store, document, node) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::warn!(error = %err, "schema reference resolution failed");
                sink.emit(path, err.to_string());
                return;
            }
        };
        self.eval_inline(value, resolved.node, resolved.document, path, sink);
    }

    #[allow(clippy::too_many_lines)]
    fn eval_inline(
        &self,
        value: &Value,
        node: &InlineNode,
        document: &SchemaDocument,
        path: &mut Vec<PathStep>,
        sink: &mut Sink,
    ) {
        // Type gate. A wrongly-typed value gets exactly one violation and
        // no further structural checks.
        if let Some(types) = &node.declared_types {
            if !types.iter().any(|ty| ty.matches(value)) {
                let expected: Vec<&str> = types.iter().map(|ty| ty.name()).collect();
                sink.emit(
                    path,
                    format!(
                        "expected {}, found {}",
                        expected.join(" or "),
                        value_type_name(value)
                    ),
                );
                return;
            }
        }

        if let Value::Object(object) = value {
            // Declared properties recurse; undeclared properties are
            // permitted and ignored (open world).
            for (name, child) in &node.properties {
                if sink.saturated() {
                    return;
                }
                if let Some(member) = object.get(name) {
                    path.push(PathStep::Key(name.clone()));
                    self.eval_node(member, child, document, path, sink);
                    path.pop();
                }
            }

            for name in &node.required {
                if sink.saturated() {
                    return;
                }
                if !object.contains_key(name) {
                    sink.emit(path, format!("missing required property '{name}'"));
                }
            }
        }

        if let Value::Array(elements) = value {
            if let Some(items) = &node.items {
                for (index, element) in elements.iter().enumerate() {
                    if sink.saturated() {
                        return;
                    }
                    path.push(PathStep::Index(index));
                    self.eval_node(element, items, document, path, sink);
                    path.pop();
                }
            }

            if let Some(bounds) = node.array_bounds {
                let count = elements.len() as u64;
                if let Some(min) = bounds.min_items {
                    if count < min {
                        sink.emit(
                            path,
                            format!("expected at least {min} items, found {count}"),
                        );
                    }
                }
                if let Some(max) = bounds.max_items {
                    if count > max {
                        sink.emit(path, format!("expected at most {max} items, found {count}"));
                    }
                }
            }
        }

        if let Value::String(text) = value {
            if let Some(bounds) = node.string_bounds {
                let length = text.chars().count() as u64;
                if let Some(min) = bounds.min_length {
                    if length < min {
                        sink.emit(
                            path,
                            format!("expected a string of at least {min} characters, found {length}"),
                        );
                    }
                }
                if let Some(max) = bounds.max_length {
                    if length > max {
                        sink.emit(
                            path,
                            format!("expected a string of at most {max} characters, found {length}"),
                        );
                    }
                }
            }

            if let Some(pattern) = &node.pattern {
                if !pattern.is_match(text) {
                    sink.emit(
                        path,
                        format!("string does not match pattern '{}'", pattern.as_str()),
                    );
                }
            }
        }

        if let Some(number) = value.as_f64() {
            if let Some(bounds) = node.number_bounds {
                if let Some(minimum) = bounds.minimum {
                    if number < minimum {
                        sink.emit(path, format!("value {number} is below the minimum {minimum}"));
                    }
                }
                if let Some(maximum) = bounds.maximum {
                    if number > maximum {
                        sink.emit(path, format!("value {number} is above the maximum {maximum}"));
                    }
                }
            }
        }

        if let Some(allowed) = &node.enumeration {
            if !allowed.iter().any(|candidate| candidate == value) {
                let rendered: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                sink.emit(
                    path,
                    format!("value {value} is not one of the allowed values [{}]", rendered.join(", ")),
                );
            }
        }

        // Conditional rules, after all structural checks. Each rule is
        // evaluated independently against this same object instance.
        if let Value::Object(object) = value {
            for rule in &node.rules {
                if sink.saturated() {
                    return;
                }
                let triggered = rule.condition.iter().all(|name| object.contains_key(name));
                if !triggered {
                    continue;
                }
                let condition: Vec<&str> = rule.condition.iter().map(String::as_str).collect();
                for name in &rule.consequence {
                    if !object.contains_key(name) {
                        sink.emit(
                            path,
                            format!(
                                "missing property '{name}' (required when '{}' is present)",
                                condition.join("', '")
                            ),
                        );
                    }
                }
            }
        }
    }
}
