use git2::{ObjectType, Oid, Repository};

use crate::error::Result;
use crate::git::{CommitLine, History, TagRef};

/// Real [History] implementation backed by the `git2` crate.
///
/// Discovers the repository from the current working directory, the same way
/// a CI job runs the tool from the checkout root.
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Creates a new GitHistory for the current working directory.
    ///
    /// # Returns
    /// * `Ok(GitHistory)` - Successfully discovered repository
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(GitHistory { repo })
    }

    /// Creates a GitHistory rooted at an explicit path.
    pub fn open(path: &std::path::Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitHistory { repo })
    }

    /// Resolves a tag name to the OID of its target commit.
    ///
    /// Peels annotated tags through to the commit. Returns `None` when the
    /// tag does not exist or does not point at a commit.
    fn tag_commit_oid(&self, tag_name: &str) -> Option<Oid> {
        self.repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .ok()
            .and_then(|r| r.peel(ObjectType::Commit).ok())
            .map(|obj| obj.id())
    }
}

impl History for GitHistory {
    fn tags_by_recency(&self) -> Result<Vec<TagRef>> {
        let tag_names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in tag_names.iter().flatten() {
            if let Some(oid) = self.tag_commit_oid(name) {
                if let Ok(commit) = self.repo.find_commit(oid) {
                    tags.push(TagRef {
                        name: name.to_string(),
                        time: commit.time().seconds(),
                    });
                }
            }
        }

        // Newest first; name as tiebreaker for same-commit tags
        tags.sort_by(|a, b| b.time.cmp(&a.time).then_with(|| b.name.cmp(&a.name)));
        Ok(tags)
    }

    fn commits_in_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CommitLine>> {
        let mut revwalk = self.repo.revwalk()?;

        match to.and_then(|tag| self.tag_commit_oid(tag)) {
            Some(oid) => revwalk.push(oid)?,
            None => revwalk.push_head()?,
        }

        if let Some(from_oid) = from.and_then(|tag| self.tag_commit_oid(tag)) {
            revwalk.hide(from_oid)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            if commits.len() >= limit {
                break;
            }
            let oid = match oid {
                Ok(oid) => oid,
                Err(_) => continue,
            };
            if let Ok(commit) = self.repo.find_commit(oid) {
                let subject = commit
                    .summary()
                    .unwrap_or("(no commit message)")
                    .to_string();
                let hash = oid.to_string().chars().take(7).collect();
                commits.push(CommitLine { hash, subject });
            }
        }

        Ok(commits)
    }

    fn tag_date(&self, tag: &str) -> Result<Option<String>> {
        let oid = match self.tag_commit_oid(tag) {
            Some(oid) => oid,
            None => return Ok(None),
        };
        let commit = self.repo.find_commit(oid)?;
        let date = chrono::DateTime::from_timestamp(commit.time().seconds(), 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string());
        Ok(date)
    }
}
