//! Typed error taxonomy for schema construction and store operations.
//!
//! These errors cover problems with the *schemas themselves* — malformed
//! schema text, duplicate registration, lookups by an unknown identity.
//! A document instance that fails its constraints is never an error: the
//! evaluator reports that as [`Violation`](crate::outcome::Violation)s.

/// Errors raised while loading schema documents or operating the store.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema text is structurally invalid: a `$ref` carrying sibling
    /// constraints, an unsupported type name, an uncompilable pattern, a
    /// local reference naming an absent definition, and so on. Fatal at
    /// load time; never deferred to validation.
    #[error("invalid schema document at {location}: {reason}")]
    DocumentConstruction { location: String, reason: String },

    /// A document with the same identity is already registered. The store
    /// is left unchanged.
    #[error("schema document '{identity}' is already registered")]
    DuplicateIdentity { identity: String },

    /// No document with the requested identity is registered.
    #[error("no schema document registered with identity '{identity}'")]
    UnknownIdentity { identity: String },

    /// The schema text is not valid JSON at all.
    #[error("schema text is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Shorthand for a [`SchemaError::DocumentConstruction`] at a schema
    /// pointer location (e.g. `#/definitions/SetLog/properties/unit`).
    pub(crate) fn construction(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DocumentConstruction {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
