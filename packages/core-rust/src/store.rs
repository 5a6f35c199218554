//! The schema store: the set of registered documents, keyed by identity.
//!
//! The store is populated once during a single-threaded setup phase and is
//! read-only afterwards. Validation only ever takes `&SchemaStore`, so any
//! number of threads may validate concurrently against the same store with
//! no locking. A dependency document (one that others reference externally)
//! can be registered before or after its referrers; resolution happens
//! lazily at evaluation time.

use std::collections::HashMap;

use serde_json::Value;

use crate::document::SchemaDocument;
use crate::error::SchemaError;
use crate::eval::Evaluator;
use crate::outcome::ValidationOutcome;

/// Holds registered [`SchemaDocument`]s and serves lookups by identity.
#[derive(Debug, Default)]
pub struct SchemaStore {
    documents: HashMap<String, SchemaDocument>,
}

impl SchemaStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document. The document and all its definitions become
    /// visible atomically; on failure the store is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateIdentity`] if a document with the
    /// same identity is already registered. Call sites that need to
    /// re-register (test setup, mostly) should construct a fresh store.
    pub fn register(&mut self, document: SchemaDocument) -> Result<(), SchemaError> {
        let identity = document.identity().to_string();
        if self.documents.contains_key(&identity) {
            return Err(SchemaError::DuplicateIdentity { identity });
        }
        tracing::debug!(identity = %identity, "registered schema document");
        self.documents.insert(identity, document);
        Ok(())
    }

    /// Looks up a document by identity.
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&SchemaDocument> {
        self.documents.get(identity)
    }

    /// Identities of all registered documents, sorted.
    #[must_use]
    pub fn identities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Validates `value` against the document registered under `identity`,
    /// returning the full violation list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownIdentity`] if no such document is
    /// registered. Instance-shape failures are reported inside the
    /// [`ValidationOutcome`], never as errors.
    pub fn validate(&self, identity: &str, value: &Value) -> Result<ValidationOutcome, SchemaError> {
        let document = self.get(identity).ok_or_else(|| SchemaError::UnknownIdentity {
            identity: identity.to_string(),
        })?;
        Ok(Evaluator::new(self).evaluate(value, document))
    }

    /// Boolean fast path: semantically `validate(..)?.valid`, but allowed
    /// to stop at the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownIdentity`] if no such document is
    /// registered.
    pub fn is_valid(&self, identity: &str, value: &Value) -> Result<bool, SchemaError> {
        let document = self.get(identity).ok_or_else(|| SchemaError::UnknownIdentity {
            identity: identity.to_string(),
        })?;
        Ok(Evaluator::new(self).is_valid(value, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ConstraintNode, InlineNode};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn empty_doc(identity: &str) -> SchemaDocument {
        SchemaDocument::new(
            identity,
            ConstraintNode::inline(InlineNode::default()),
            BTreeMap::new(),
        )
        .expect("empty document constructs")
    }

    #[test]
    fn register_and_get() {
        let mut store = SchemaStore::new();
        store.register(empty_doc("workout-log")).expect("first registration");
        assert!(store.get("workout-log").is_some());
        assert!(store.get("program").is_none());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn duplicate_registration_fails_and_leaves_store_unchanged() {
        let mut store = SchemaStore::new();
        store.register(empty_doc("workout-log")).expect("first registration");
        let err = store.register(empty_doc("workout-log")).expect_err("duplicate");
        assert!(matches!(err, SchemaError::DuplicateIdentity { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn identities_are_sorted() {
        let mut store = SchemaStore::new();
        store.register(empty_doc("program")).unwrap();
        store.register(empty_doc("workout-log")).unwrap();
        store.register(empty_doc("lifter-profile")).unwrap();
        assert_eq!(
            store.identities(),
            vec!["lifter-profile", "program", "workout-log"]
        );
    }

    #[test]
    fn validate_unknown_identity_is_an_error_not_a_violation() {
        let store = SchemaStore::new();
        let err = store.validate("nope", &json!({})).expect_err("unknown identity");
        assert!(matches!(err, SchemaError::UnknownIdentity { .. }));
    }

    #[test]
    fn validate_against_unconstrained_document_accepts_anything() {
        let mut store = SchemaStore::new();
        store.register(empty_doc("anything")).unwrap();
        let outcome = store.validate("anything", &json!({"x": [1, 2, 3]})).unwrap();
        assert!(outcome.valid);
        assert!(store.is_valid("anything", &json!(null)).unwrap());
    }
}
