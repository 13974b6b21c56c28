//! Build-pass slot registry.
//!
//! # Responsibilities
//! - Record the most recently attached child for each (parent, segment) slot
//! - Hand back that child when a later insertion targets the same slot
//!
//! # Design Decisions
//! - Keyed on the parent's `NodeId`, never on a textual rendering of the
//!   node, so two nodes that would print identically stay distinguishable
//! - Last write wins per slot, silently
//! - Scoped to a single build invocation; [`TreeBuilder::finish`] drops it
//!
//! [`TreeBuilder::finish`]: crate::tree::builder::TreeBuilder::finish

use std::collections::HashMap;

use crate::tree::node::NodeId;

/// Identifies a unique attachment point: (owning node, child segment name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    parent: NodeId,
    segment: String,
}

/// Lookup table from slot to its most recently attached occupant.
///
/// The tree primitive itself only supports forward attachment; the builder
/// needs to revisit and replace nodes it created earlier in the same pass,
/// and this table is what makes that reverse lookup possible.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    slots: HashMap<SlotKey, NodeId>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Record `child` as the occupant of `segment` under `parent`,
    /// superseding any prior entry for that slot.
    pub fn put(&mut self, parent: NodeId, segment: &str, child: NodeId) {
        self.slots.insert(
            SlotKey {
                parent,
                segment: segment.to_owned(),
            },
            child,
        );
    }

    /// The recorded occupant of `segment` under `parent`, if any.
    pub fn get(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.slots
            .get(&SlotKey {
                parent,
                segment: segment.to_owned(),
            })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{NodeKind, ResourceTree};

    #[test]
    fn test_put_then_get() {
        let mut tree: ResourceTree<&str> = ResourceTree::new();
        let child = tree.alloc(NodeKind::Placeholder);

        let mut registry = SlotRegistry::new();
        registry.put(tree.root(), "client", child);

        assert_eq!(registry.get(tree.root(), "client"), Some(child));
        assert_eq!(registry.get(tree.root(), "server"), None);
        assert_eq!(registry.get(child, "client"), None);
    }

    #[test]
    fn test_last_write_wins_per_slot() {
        let mut tree: ResourceTree<&str> = ResourceTree::new();
        let first = tree.alloc(NodeKind::Placeholder);
        let second = tree.alloc(NodeKind::Handler("h"));

        let mut registry = SlotRegistry::new();
        registry.put(tree.root(), "client", first);
        registry.put(tree.root(), "client", second);

        assert_eq!(registry.get(tree.root(), "client"), Some(second));
    }

    #[test]
    fn test_same_segment_under_distinct_parents_stays_distinguishable() {
        // Two placeholders that would render identically must not collide:
        // the key is the parent's id, not its printed form.
        let mut tree: ResourceTree<&str> = ResourceTree::new();
        let parent_a = tree.alloc(NodeKind::Placeholder);
        let parent_b = tree.alloc(NodeKind::Placeholder);
        let child_a = tree.alloc(NodeKind::Placeholder);
        let child_b = tree.alloc(NodeKind::Placeholder);

        let mut registry = SlotRegistry::new();
        registry.put(parent_a, "tags", child_a);
        registry.put(parent_b, "tags", child_b);

        assert_eq!(registry.get(parent_a, "tags"), Some(child_a));
        assert_eq!(registry.get(parent_b, "tags"), Some(child_b));
    }
}
