//! `OpenWeight` Core — schema documents, reference resolution, and the
//! conditional-constraint evaluator.
//!
//! This crate is the single shared validation engine behind the `OpenWeight`
//! SDKs. It models JSON Schema documents as compiled constraint trees
//! ([`node`]), holds them in an immutable [`store::SchemaStore`], resolves
//! local and cross-document references ([`resolve`]), and walks document
//! instances against them ([`eval`]), reporting every failing constraint as
//! a [`outcome::Violation`].
//!
//! The engine is pure and synchronous: once a store is populated, any number
//! of threads may validate against it concurrently with no locking.

pub mod document;
pub mod error;
pub mod eval;
pub mod loader;
pub mod node;
pub mod outcome;
pub mod resolve;
pub mod store;

pub use document::SchemaDocument;
pub use error::SchemaError;
pub use eval::Evaluator;
pub use node::{ConditionalRule, ConstraintNode, InlineNode, PrimitiveType, Reference};
pub use outcome::{InstancePath, PathStep, ValidationOutcome, Violation};
pub use resolve::{resolve_node, ResolveError, Resolved};
pub use store::SchemaStore;
