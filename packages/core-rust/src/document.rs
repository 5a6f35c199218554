//! Schema documents: named, immutable constraint trees.

use std::collections::BTreeMap;

use crate::error::SchemaError;
use crate::node::{ConstraintNode, Reference};

/// A named, immutable constraint tree with its local definitions.
///
/// Documents are value objects: constructed once (usually by the Draft-07
/// loader in [`crate::loader`]), registered into a
/// [`SchemaStore`](crate::store::SchemaStore), and never mutated afterwards.
/// The identity is the resolution target for external references from other
/// documents.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    identity: String,
    root: ConstraintNode,
    definitions: BTreeMap<String, ConstraintNode>,
}

impl SchemaDocument {
    /// Assembles a document and eagerly checks every local reference in it
    /// against the definitions map, so a dangling `#/definitions/...` fails
    /// at load time rather than mid-validation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DocumentConstruction`] if any local reference
    /// names an absent definition.
    pub fn new(
        identity: impl Into<String>,
        root: ConstraintNode,
        definitions: BTreeMap<String, ConstraintNode>,
    ) -> Result<Self, SchemaError> {
        let doc = Self {
            identity: identity.into(),
            root,
            definitions,
        };
        doc.check_local_references(&doc.root, "#")?;
        for (name, node) in &doc.definitions {
            doc.check_local_references(node, &format!("#/definitions/{name}"))?;
        }
        Ok(doc)
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub fn root(&self) -> &ConstraintNode {
        &self.root
    }

    /// Looks up a local definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&ConstraintNode> {
        self.definitions.get(name)
    }

    /// Names of all local definitions, in sorted order.
    #[must_use]
    pub fn definition_names(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    fn check_local_references(
        &self,
        node: &ConstraintNode,
        location: &str,
    ) -> Result<(), SchemaError> {
        match node {
            ConstraintNode::Reference(Reference::Local(name)) => {
                if self.definitions.contains_key(name) {
                    Ok(())
                } else {
                    Err(SchemaError::construction(
                        location,
                        format!(
                            "local reference #/definitions/{name} names no definition in '{}'",
                            self.identity
                        ),
                    ))
                }
            }
            // External references stay lazy: the target document may be
            // registered after this one is constructed.
            ConstraintNode::Reference(Reference::External(_)) => Ok(()),
            ConstraintNode::Inline(inline) => {
                for (prop, child) in &inline.properties {
                    self.check_local_references(child, &format!("{location}/properties/{prop}"))?;
                }
                if let Some(items) = &inline.items {
                    self.check_local_references(items, &format!("{location}/items"))?;
                }
                Ok(())
            }
        }
    }
}
