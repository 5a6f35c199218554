//! Violations and the aggregate validation outcome.
//!
//! A [`Violation`] pinpoints one failed constraint: the path of the instance
//! value that failed and a human-readable message. [`ValidationOutcome`]
//! wraps the full ordered list from one evaluation pass. Violation order is
//! evaluation order (depth-first, properties before array items, conditional
//! rules after structural checks) and is deterministic for a given
//! document/schema pair.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step of an instance path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// The location of a value inside a document instance, from the root.
///
/// Renders in JSON-Pointer style: `/exercises/0/sets/1`. The root path
/// renders as `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstancePath(Vec<PathStep>);

impl InstancePath {
    /// The document root.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathStep>> for InstancePath {
    fn from(steps: Vec<PathStep>) -> Self {
        Self(steps)
    }
}

impl From<&[PathStep]> for InstancePath {
    fn from(steps: &[PathStep]) -> Self {
        Self(steps.to_vec())
    }
}

impl Serialize for InstancePath {
    /// Serializes as the rendered pointer string (`"/exercises/0/sets/1"`),
    /// not as a step array, so reported violations stay readable as JSON.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for step in &self.0 {
            match step {
                PathStep::Key(key) => write!(f, "/{key}")?,
                PathStep::Index(index) => write!(f, "/{index}")?,
            }
        }
        Ok(())
    }
}

/// One reported constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Where in the instance the failure occurred.
    pub path: InstancePath,
    /// What failed. Resolution failures use a distinct `unresolved ...
    /// reference` shape so "your document is wrong" and "your schema setup
    /// is wrong" are distinguishable by message text alone.
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(path: impl Into<InstancePath>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The aggregate result of one evaluation pass.
///
/// `valid` is true iff `violations` is empty; [`ValidationOutcome::from_violations`]
/// maintains that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// Wraps a violation list into an outcome, deriving `valid`.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }
}
