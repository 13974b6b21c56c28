//! Error definitions for tree construction.

use thiserror::Error;

/// Errors that can occur while segmenting paths and assembling the tree.
///
/// The taxonomy is deliberately small: the only rejectable input is a
/// malformed path. Duplicate exact paths are not an error (last writer
/// wins, with prior deeper attachments preserved).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path contains no segments at all (e.g. `"/"`).
    #[error("path {path:?} yields no segments")]
    EmptyPath { path: String },

    /// The path does not begin with the separator.
    #[error("path {path:?} does not begin with '/'")]
    MissingLeadingSeparator { path: String },

    /// A component between separators is empty (trailing or doubled
    /// separator).
    #[error("path {path:?} contains an empty segment")]
    EmptySegment { path: String },
}

/// Result type for tree construction operations.
pub type TreeResult<T> = Result<T, TreeError>;
