//! Git history abstraction layer
//!
//! This module provides a trait-based abstraction over the git queries the
//! release-notes pipeline needs, allowing for a real implementation backed by
//! the `git2` crate and a mock implementation for testing.
//!
//! Most code should depend on the [History] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::GitHistory;

use crate::error::Result;

/// A tag together with the commit time of its target, used for recency sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// The tag name (e.g., "v1.2.0")
    pub name: String,
    /// Unix timestamp of the tagged commit
    pub time: i64,
}

/// A single commit rendered for release notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitLine {
    /// Shortened commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
}

impl CommitLine {
    /// Renders the commit as a release-notes entry: `<subject> (<hash>)`.
    pub fn entry(&self) -> String {
        format!("{} ({})", self.subject, self.hash)
    }
}

/// Read-only git history queries used by the source selector.
///
/// Implementations must be `Send`. All methods return
/// [crate::error::Result], mapping underlying `git2` errors through
/// [crate::error::ReleaseNotesError].
pub trait History: Send {
    /// Lists all tags sorted by target-commit time, newest first.
    fn tags_by_recency(&self) -> Result<Vec<TagRef>>;

    /// Collects commits in a range, newest first, capped at `limit`.
    ///
    /// The range is `from..to` in git terms: commits reachable from `to` but
    /// not from `from`. `to = None` means the working HEAD; `from = None`
    /// means no lower bound (full history). A boundary tag that does not
    /// resolve is treated as absent rather than as an error.
    fn commits_in_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CommitLine>>;

    /// Resolves the ISO calendar date (YYYY-MM-DD) of a tag's target commit.
    ///
    /// Returns `Ok(None)` when the tag does not exist.
    fn tag_date(&self, tag: &str) -> Result<Option<String>>;
}
