use std::collections::HashMap;

use crate::error::Result;
use crate::git::{CommitLine, History, TagRef};

/// Mock history for testing without actual git operations.
///
/// Tags are returned in insertion order, so tests construct them newest
/// first. Commit ranges are keyed by the `(from, to)` boundary pair.
pub struct MockHistory {
    tags: Vec<TagRef>,
    ranges: HashMap<(Option<String>, Option<String>), Vec<CommitLine>>,
    dates: HashMap<String, String>,
}

impl MockHistory {
    /// Create a new empty mock history
    pub fn new() -> Self {
        MockHistory {
            tags: Vec::new(),
            ranges: HashMap::new(),
            dates: HashMap::new(),
        }
    }

    /// Add a tag; call in newest-first order
    pub fn add_tag(&mut self, name: impl Into<String>, time: i64) {
        self.tags.push(TagRef {
            name: name.into(),
            time,
        });
    }

    /// Register the commits returned for a specific range
    pub fn add_range(
        &mut self,
        from: Option<&str>,
        to: Option<&str>,
        commits: Vec<CommitLine>,
    ) {
        self.ranges.insert(
            (from.map(|s| s.to_string()), to.map(|s| s.to_string())),
            commits,
        );
    }

    /// Register the target-commit date for a tag
    pub fn add_date(&mut self, tag: impl Into<String>, date: impl Into<String>) {
        self.dates.insert(tag.into(), date.into());
    }
}

impl Default for MockHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MockHistory {
    fn tags_by_recency(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn commits_in_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CommitLine>> {
        let key = (from.map(|s| s.to_string()), to.map(|s| s.to_string()));
        let commits = self.ranges.get(&key).cloned().unwrap_or_default();
        Ok(commits.into_iter().take(limit).collect())
    }

    fn tag_date(&self, tag: &str) -> Result<Option<String>> {
        Ok(self.dates.get(tag).cloned())
    }
}
