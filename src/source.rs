//! Source selection: changelog section, then git history, then fallback.
//!
//! Every failure along the way is swallowed and treated as "no entries from
//! this source" so the next source gets a chance. The selector itself never
//! errors: at worst it produces the single static fallback entry.

use std::path::Path;

use crate::changelog;
use crate::config::Config;
use crate::context::ReleaseContext;
use crate::git::{History, TagRef};

/// Entry emitted when neither the changelog nor git history yields anything.
pub const FALLBACK_ENTRY: &str = "No release notes available.";

/// Collects release entries for the current context.
///
/// Tries, in order: the changelog section for the context's version, the
/// commit range between the previous and current tag, and finally the static
/// fallback. `history` is `None` when the tool runs outside a git repository.
pub fn collect_entries(
    ctx: &ReleaseContext,
    config: &Config,
    history: Option<&dyn History>,
) -> Vec<String> {
    let entries = changelog_entries(Path::new(&config.changelog_path), &ctx.version);
    if !entries.is_empty() {
        return entries;
    }

    if let Some(history) = history {
        let entries = history_entries(history, &ctx.tag, config.max_commits);
        if !entries.is_empty() {
            return entries;
        }
    }

    vec![FALLBACK_ENTRY.to_string()]
}

/// Changelog source: missing or unreadable files simply yield no entries.
fn changelog_entries(path: &Path, version: &str) -> Vec<String> {
    changelog::extract_entries(path, version).unwrap_or_default()
}

/// Git source: one entry per commit between the previous and current tag.
fn history_entries(history: &dyn History, current_tag: &str, limit: usize) -> Vec<String> {
    let tags = match history.tags_by_recency() {
        Ok(tags) => tags,
        Err(_) => return Vec::new(),
    };

    let (from, to) = select_range(&tags, current_tag);
    match history.commits_in_range(from.as_deref(), to.as_deref(), limit) {
        Ok(commits) => commits.iter().map(|c| c.entry()).collect(),
        Err(_) => Vec::new(),
    }
}

/// Picks the `(from, to)` tag boundaries for the commit-log query.
///
/// With tags sorted newest first:
/// - current tag present: `to` is the current tag, `from` is the tag right
///   after it (the previous release), absent for the oldest tag;
/// - current tag absent (untagged run): `to` is the working HEAD, `from` is
///   the newest tag if one exists;
/// - no tags at all: full history from HEAD.
pub fn select_range(tags: &[TagRef], current_tag: &str) -> (Option<String>, Option<String>) {
    if let Some(pos) = tags.iter().position(|t| t.name == current_tag) {
        let previous = tags.get(pos + 1).map(|t| t.name.clone());
        (previous, Some(current_tag.to_string()))
    } else {
        let newest = tags.first().map(|t| t.name.clone());
        (newest, None)
    }
}
