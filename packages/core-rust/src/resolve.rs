//! Reference resolution: turning a [`Reference`] into a concrete inline node.
//!
//! Local references resolve into the current document's definitions map;
//! external references resolve to the *root* of another document registered
//! in the store (whole-document references only — no external + fragment
//! composition). A resolved node may itself be a reference, so resolution
//! iterates until it lands on an inline node, with a cycle guard so that a
//! reference loop surfaces as a failure instead of spinning forever.

use crate::document::SchemaDocument;
use crate::node::{ConstraintNode, InlineNode, Reference};
use crate::store::SchemaStore;

/// A fully resolved node together with the document it lives in.
///
/// The document matters: local references encountered while descending into
/// the resolved node must resolve against *its* definitions, not the
/// referrer's.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub node: &'a InlineNode,
    pub document: &'a SchemaDocument,
}

/// Why a reference could not be resolved.
///
/// The rendered messages all start with `unresolved` or `circular` so that
/// schema-setup mistakes are greppable and distinguishable from ordinary
/// structural violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unresolved local reference #/definitions/{name}: no such definition in schema '{document}'")]
    UnresolvedLocal { name: String, document: String },

    #[error("unresolved external reference '{identity}': no document with this identity is registered in the schema store")]
    UnresolvedExternal { identity: String },

    #[error("circular schema reference: {chain}")]
    Circular { chain: String },
}

/// Resolves `node` to an inline node, following reference chains.
///
/// Inline nodes resolve to themselves. Each hop re-enters the store (for
/// external references) or the current document's definitions (for local
/// ones); document context switches on every external hop.
///
/// # Errors
///
/// Returns a [`ResolveError`] when a hop names an absent definition or an
/// unregistered document, or when the chain revisits a reference.
pub fn resolve_node<'a>(
    store: &'a SchemaStore,
    document: &'a SchemaDocument,
    node: &'a ConstraintNode,
) -> Result<Resolved<'a>, ResolveError> {
    let mut current_doc = document;
    let mut current = node;
    // Chains are short in practice (one or two hops); a Vec scan beats a
    // hash set at this size and keeps the chain printable.
    let mut visited: Vec<String> = Vec::new();

    loop {
        match current {
            ConstraintNode::Inline(inline) => {
                return Ok(Resolved {
                    node: inline,
                    document: current_doc,
                });
            }
            ConstraintNode::Reference(reference) => {
                let hop = format!("{}:{reference}", current_doc.identity());
                if visited.contains(&hop) {
                    visited.push(hop);
                    return Err(ResolveError::Circular {
                        chain: visited.join(" -> "),
                    });
                }
                visited.push(hop);

                match reference {
                    Reference::Local(name) => {
                        current = current_doc.definition(name).ok_or_else(|| {
                            ResolveError::UnresolvedLocal {
                                name: name.clone(),
                                document: current_doc.identity().to_string(),
                            }
                        })?;
                    }
                    Reference::External(identity) => {
                        let target = store.get(identity).ok_or_else(|| {
                            ResolveError::UnresolvedExternal {
                                identity: identity.clone(),
                            }
                        })?;
                        current_doc = target;
                        current = target.root();
                    }
                }
            }
        }
    }
}
