//! Routing tree subsystem.
//!
//! # Data Flow
//! ```text
//! (path, handler) pairs
//!     → path segmentation (intermediates + terminal)
//!     → builder.rs (walk intermediates, create or reuse placeholders)
//!     → registry.rs (slot bookkeeping for later replacement)
//!     → node.rs (arena: attach child, migrate children on promotion)
//!     → Frozen ResourceTree (read-only walks at serve time)
//! ```
//!
//! # Design Decisions
//! - Tree built once at startup, immutable after `finish()`
//! - Registry lives for exactly one build pass, then discarded
//! - Node identity is an arena index, never a derived string
//! - Insertion order never changes the final tree shape

pub mod builder;
pub mod node;
pub mod registry;
