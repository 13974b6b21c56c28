//! Resource routing tree construction.
//!
//! Builds the hierarchical routing tree of a request-dispatch server from a
//! flat collection of (path, handler) pairs. The underlying tree primitive
//! only attaches one direct child at a time, so the builder walks each
//! path's intermediate segments, occupying empty slots with placeholder
//! nodes, and attaches the handler at the terminal segment, promoting any
//! placeholder already there by migrating its children across.
//!
//! # Architecture Overview
//!
//! ```text
//! {"/a/b": H1, "/a": H2}
//!     │
//!     ▼
//! ┌─────────────┐    ┌──────────────┐    ┌───────────────────────┐
//! │ PathSegments│───▶│ TreeBuilder  │───▶│ ResourceTree (arena)  │
//! │ split path, │    │ walk, place- │    │ attach one child at a │
//! │ terminal    │    │ hold, promote│    │ time; migrate children│
//! └─────────────┘    └──────┬───────┘    └───────────────────────┘
//!                           │
//!                    ┌──────▼───────┐
//!                    │ SlotRegistry │  (node, segment) → occupant,
//!                    │ one build    │  discarded by finish()
//!                    └──────────────┘
//!
//! Result:  root ── a (H2) ── b (H1)
//! ```
//!
//! Construction is a single synchronous pass performed once at startup;
//! the finished tree is read-only and safe to share across threads.
//!
//! # Example
//!
//! ```rust
//! use resource_tree::create_resource_tree;
//!
//! let tree = create_resource_tree([
//!     ("/_matrix/client", "client"),
//!     ("/_matrix/client/r0/sync", "sync"),
//! ])
//! .unwrap();
//!
//! let sync = tree.resolve("/_matrix/client/r0/sync").unwrap().unwrap();
//! assert_eq!(tree.handler(sync), Some(&"sync"));
//!
//! // Intermediate segments resolve to placeholders, not errors.
//! let r0 = tree.resolve("/_matrix/client/r0").unwrap().unwrap();
//! assert!(tree.is_placeholder(r0));
//! ```

pub mod error;
pub mod path;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use path::PathSegments;
pub use tree::builder::{create_resource_tree, TreeBuilder};
pub use tree::node::{NodeId, NodeKind, ResourceTree};
pub use tree::registry::SlotRegistry;
