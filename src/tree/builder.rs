//! Tree assembly.
//!
//! # Responsibilities
//! - Insert each (path, handler) pair: walk intermediates, attach terminal
//! - Create placeholders for intermediate slots with no occupant yet
//! - Promote a prior occupant of an exact path: replace it with the new
//!   handler node and migrate its children across
//!
//! # Design Decisions
//! - Malformed paths are rejected before any mutation of the tree
//! - Duplicate exact paths are not an error: last writer wins, with the
//!   prior occupant's children preserved via migration
//! - Migrated slots are re-registered under the new parent id so later
//!   insertions find the live occupant, keeping insertion order irrelevant
//!   to the final tree shape

use crate::error::TreeResult;
use crate::path::PathSegments;
use crate::tree::node::{NodeId, NodeKind, ResourceTree};
use crate::tree::registry::SlotRegistry;

/// Incremental tree builder: one arena, one registry, one build pass.
///
/// The registry only stays valid for the duration of one build, so the
/// builder owns it and [`finish`](Self::finish) discards it, handing back
/// a frozen [`ResourceTree`].
#[derive(Debug)]
pub struct TreeBuilder<T> {
    tree: ResourceTree<T>,
    registry: SlotRegistry,
}

impl<T> TreeBuilder<T> {
    /// Fresh builder with a placeholder root and an empty registry.
    pub fn new() -> Self {
        Self {
            tree: ResourceTree::new(),
            registry: SlotRegistry::new(),
        }
    }

    /// Insert one (path, handler) pair and return the id of the attached
    /// handler node.
    ///
    /// Walks the intermediate segments from the root, creating a
    /// placeholder for each slot with no occupant and descending into the
    /// existing child otherwise. At the terminal segment the handler node
    /// replaces whatever occupied the slot, adopting the prior occupant's
    /// children so deeper paths inserted earlier stay reachable.
    pub fn insert(&mut self, path: &str, handler: T) -> TreeResult<NodeId> {
        let segments = PathSegments::parse(path)?;

        tracing::info!(path = %path, "Attaching handler to path");

        let mut current = self.tree.root();
        for segment in segments.intermediate() {
            current = match self.tree.child(current, segment) {
                Some(existing) => existing,
                None => {
                    let placeholder = self.tree.alloc(NodeKind::Placeholder);
                    self.tree.attach_child(current, segment, placeholder);
                    self.registry.put(current, segment, placeholder);
                    tracing::debug!(segment = %segment, "Created placeholder node");
                    placeholder
                }
            };
        }

        let terminal = segments.terminal();
        let node = self.tree.alloc(NodeKind::Handler(handler));

        // A prior occupant of this exact slot (a placeholder, or an earlier
        // handler for the same path) may have accumulated children. Adopt
        // them and re-register each migrated slot under the new node.
        if let Some(prior) = self.registry.get(current, terminal) {
            for (name, child) in self.tree.adopt_children(prior, node) {
                self.registry.put(node, &name, child);
            }
        }

        self.tree.attach_child(current, terminal, node);
        self.registry.put(current, terminal, node);

        Ok(node)
    }

    /// Discard the registry and hand back the finished, read-only tree.
    pub fn finish(self) -> ResourceTree<T> {
        self.tree
    }
}

impl<T> Default for TreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a routing tree from a flat collection of (path, handler) pairs.
///
/// The pairs may arrive in any order; the resulting tree is the same for
/// every ordering of a set of distinct paths. The first malformed path
/// aborts the build and propagates its error; callers that prefer to skip
/// bad pairs drive a [`TreeBuilder`] directly and decide per pair.
pub fn create_resource_tree<P, T>(
    pairs: impl IntoIterator<Item = (P, T)>,
) -> TreeResult<ResourceTree<T>>
where
    P: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    for (path, handler) in pairs {
        builder.insert(path.as_ref(), handler)?;
    }
    Ok(builder.finish())
}
