//! Path segmentation.
//!
//! # Responsibilities
//! - Split a path string into an ordered sequence of non-empty segments
//! - Discard the empty component before the leading separator
//! - Single out the terminal segment (the handler attachment point)
//!
//! # Design Decisions
//! - Paths must begin with `/`; relative paths are rejected
//! - Empty segments are malformed (`/a//b`, `/a/`), not silently skipped
//! - Segments borrow from the input string (no allocation per segment)

use crate::error::{TreeError, TreeResult};

/// A path split into non-empty segment names.
///
/// All but the last segment are "intermediate" (placeholder territory);
/// the last is the "terminal" segment the caller's handler attaches to.
/// A parsed path always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSegments<'a> {
    /// Split `path` on `/`.
    ///
    /// Rejects paths without a leading separator, paths that yield zero
    /// segments, and paths with an empty segment anywhere.
    pub fn parse(path: &'a str) -> TreeResult<Self> {
        let rest = path
            .strip_prefix('/')
            .ok_or_else(|| TreeError::MissingLeadingSeparator {
                path: path.to_owned(),
            })?;

        if rest.is_empty() {
            return Err(TreeError::EmptyPath {
                path: path.to_owned(),
            });
        }

        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(TreeError::EmptySegment {
                path: path.to_owned(),
            });
        }

        Ok(Self { segments })
    }

    /// Every segment except the terminal one.
    pub fn intermediate(&self) -> &[&'a str] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The final segment, to which the handler is attached.
    pub fn terminal(&self) -> &'a str {
        self.segments[self.segments.len() - 1]
    }

    /// All segments in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_nested_path() {
        let segments = PathSegments::parse("/a/b/c").unwrap();
        assert_eq!(segments.intermediate(), &["a", "b"]);
        assert_eq!(segments.terminal(), "c");
    }

    #[test]
    fn test_single_segment_has_no_intermediates() {
        let segments = PathSegments::parse("/sync").unwrap();
        assert!(segments.intermediate().is_empty());
        assert_eq!(segments.terminal(), "sync");
    }

    #[test]
    fn test_rejects_bare_root() {
        assert_eq!(
            PathSegments::parse("/"),
            Err(TreeError::EmptyPath {
                path: "/".to_owned()
            })
        );
    }

    #[test]
    fn test_rejects_missing_leading_separator() {
        assert_eq!(
            PathSegments::parse("a/b"),
            Err(TreeError::MissingLeadingSeparator {
                path: "a/b".to_owned()
            })
        );
        assert!(matches!(
            PathSegments::parse(""),
            Err(TreeError::MissingLeadingSeparator { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!(matches!(
            PathSegments::parse("/a//b"),
            Err(TreeError::EmptySegment { .. })
        ));
        assert!(matches!(
            PathSegments::parse("/a/"),
            Err(TreeError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_iter_yields_all_segments_in_order() {
        let segments = PathSegments::parse("/_matrix/client/r0/sync").unwrap();
        let collected: Vec<&str> = segments.iter().collect();
        assert_eq!(collected, ["_matrix", "client", "r0", "sync"]);
    }
}
