//! Node arena and tree primitives.
//!
//! # Responsibilities
//! - Own every node in a single arena, handing out opaque `NodeId` handles
//! - Attach one direct child at a time, names unique within a node
//! - Move a node's entire child set to another node (migration on promotion)
//! - Read-only walking for consumers of the finished tree
//!
//! # Design Decisions
//! - Node identity is the arena index, assigned at creation; identity is
//!   never derived from a textual rendering of the node
//! - Placeholder vs handler is a tagged variant, not a trait hierarchy
//! - Children live in a `BTreeMap` so iteration order is deterministic
//! - Mutating operations are `pub(crate)`; the public API is read-only,
//!   and the only public mutation path is [`TreeBuilder`]
//!
//! [`TreeBuilder`]: crate::tree::builder::TreeBuilder

use std::collections::BTreeMap;

use crate::error::TreeResult;
use crate::path::PathSegments;

/// Opaque handle to a node in a [`ResourceTree`] arena.
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeId(u32);

/// What occupies a tree slot.
#[derive(Debug, Clone)]
pub enum NodeKind<T> {
    /// Passive occupant of an intermediate path slot. At serve time an
    /// unreplaced placeholder signals "no handler registered here".
    Placeholder,
    /// Carries the caller-supplied handler payload, opaque to the tree.
    Handler(T),
}

#[derive(Debug, Clone)]
struct Node<T> {
    kind: NodeKind<T>,
    children: BTreeMap<String, NodeId>,
}

/// Arena-backed routing tree, rooted at a placeholder node.
///
/// Walking the finished tree from [`root`](Self::root) by a registered
/// path's segments reaches exactly the handler inserted for that path;
/// intermediate segments that are not themselves registered paths resolve
/// to placeholders. The tree is `Send + Sync` when `T` is, so a server can
/// share it read-only across threads once construction finishes.
#[derive(Debug, Clone)]
pub struct ResourceTree<T> {
    nodes: Vec<Node<T>>,
    root: NodeId,
}

impl<T> ResourceTree<T> {
    /// Fresh tree holding only a placeholder root.
    pub(crate) fn new() -> Self {
        let root = Node {
            kind: NodeKind::Placeholder,
            children: BTreeMap::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn alloc(&mut self, kind: NodeKind<T>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            children: BTreeMap::new(),
        });
        id
    }

    /// Attach `child` as `parent`'s child named `name`, replacing any
    /// prior occupant of that slot.
    pub(crate) fn attach_child(&mut self, parent: NodeId, name: &str, child: NodeId) {
        self.nodes[parent.0 as usize]
            .children
            .insert(name.to_owned(), child);
    }

    /// Move every (name, child) entry from `from` into `to`, leaving
    /// `from` childless. Returns the migrated entries so the caller can
    /// re-register them under the new parent.
    ///
    /// This is the one place where silent child loss is possible during a
    /// promotion, so the transfer is a single named operation rather than
    /// inline iteration at the call site.
    pub(crate) fn adopt_children(&mut self, from: NodeId, to: NodeId) -> Vec<(String, NodeId)> {
        let moved = std::mem::take(&mut self.nodes[from.0 as usize].children);
        let migrated: Vec<(String, NodeId)> = moved.into_iter().collect();
        let target = &mut self.nodes[to.0 as usize].children;
        for (name, child) in &migrated {
            target.insert(name.clone(), *child);
        }
        migrated
    }

    /// The child of `parent` named `name`, if any.
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0 as usize].children.get(name).copied()
    }

    /// Names of `id`'s direct children, in sorted order.
    pub fn child_names(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.nodes[id.0 as usize].children.keys().map(String::as_str)
    }

    /// Whether `id` is a placeholder (no handler payload).
    pub fn is_placeholder(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0 as usize].kind, NodeKind::Placeholder)
    }

    /// The handler payload at `id`, or `None` for a placeholder.
    pub fn handler(&self, id: NodeId) -> Option<&T> {
        match &self.nodes[id.0 as usize].kind {
            NodeKind::Handler(handler) => Some(handler),
            NodeKind::Placeholder => None,
        }
    }

    /// Descend from the root by segment names. `None` if any segment has
    /// no child attached.
    pub fn walk<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Option<NodeId> {
        let mut current = self.root;
        for segment in segments {
            current = self.child(current, segment)?;
        }
        Some(current)
    }

    /// Segment `path` and walk it from the root.
    pub fn resolve(&self, path: &str) -> TreeResult<Option<NodeId>> {
        let segments = PathSegments::parse(path)?;
        Ok(self.walk(segments.iter()))
    }

    /// Number of allocated nodes, including any replaced ones that are no
    /// longer reachable from the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Structural equality from the roots down: same child names, same node
/// kinds, equal handler payloads. Arena layout and unreachable nodes do
/// not participate.
impl<T: PartialEq> PartialEq for ResourceTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root, other, other.root)
    }
}

impl<T: PartialEq> ResourceTree<T> {
    fn subtree_eq(&self, a: NodeId, other: &Self, b: NodeId) -> bool {
        let node_a = &self.nodes[a.0 as usize];
        let node_b = &other.nodes[b.0 as usize];

        let kinds_match = match (&node_a.kind, &node_b.kind) {
            (NodeKind::Placeholder, NodeKind::Placeholder) => true,
            (NodeKind::Handler(x), NodeKind::Handler(y)) => x == y,
            _ => false,
        };

        kinds_match
            && node_a.children.len() == node_b.children.len()
            && node_a
                .children
                .iter()
                .zip(node_b.children.iter())
                .all(|((name_a, child_a), (name_b, child_b))| {
                    name_a == name_b && self.subtree_eq(*child_a, other, *child_b)
                })
    }
}

#[cfg(feature = "visualize")]
mod visualize {
    //! Serialize the reachable tree as nested `{kind, handler?, children}`
    //! maps for debugging and snapshotting.

    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{NodeId, NodeKind, ResourceTree};

    struct NodeRef<'a, T> {
        tree: &'a ResourceTree<T>,
        id: NodeId,
    }

    struct ChildrenRef<'a, T> {
        tree: &'a ResourceTree<T>,
        id: NodeId,
    }

    impl<T: Serialize> Serialize for ResourceTree<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            NodeRef {
                tree: self,
                id: self.root,
            }
            .serialize(serializer)
        }
    }

    impl<T: Serialize> Serialize for NodeRef<'_, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let node = &self.tree.nodes[self.id.0 as usize];
            let mut map = serializer.serialize_map(None)?;
            match &node.kind {
                NodeKind::Placeholder => map.serialize_entry("kind", "placeholder")?,
                NodeKind::Handler(handler) => {
                    map.serialize_entry("kind", "handler")?;
                    map.serialize_entry("handler", handler)?;
                }
            }
            map.serialize_entry(
                "children",
                &ChildrenRef {
                    tree: self.tree,
                    id: self.id,
                },
            )?;
            map.end()
        }
    }

    impl<T: Serialize> Serialize for ChildrenRef<'_, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let children = &self.tree.nodes[self.id.0 as usize].children;
            let mut map = serializer.serialize_map(Some(children.len()))?;
            for (name, child) in children {
                map.serialize_entry(
                    name,
                    &NodeRef {
                        tree: self.tree,
                        id: *child,
                    },
                )?;
            }
            map.end()
        }
    }
}
