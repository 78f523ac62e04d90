use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{ReleaseNotesError, Result};

/// Extracts release entries for a version from a markdown changelog.
///
/// Locates a `## [<version>]` section header, or the `## [Unreleased]` section
/// when the version has no entry yet, and collects the `- ` bullet lines up to
/// the next section header or end of file. Bullets are returned with the `- `
/// prefix stripped.
///
/// # Arguments
/// * `path` - Path to the changelog file
/// * `version` - Version string to look for (e.g., "1.2.0")
///
/// # Returns
/// * `Ok(entries)` - Bullet lines from the matched section (possibly empty)
/// * `Err` - If the file cannot be read
pub fn extract_entries(path: &Path, version: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseNotesError::changelog(format!("cannot read {}: {}", path.display(), e))
    })?;
    Ok(entries_from_content(&content, version))
}

/// Extracts entries from changelog text already in memory.
pub fn entries_from_content(content: &str, version: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();

    let start = section_start(&lines, version)
        .or_else(|| unreleased_start(&lines));

    let start = match start {
        Some(idx) => idx,
        None => return Vec::new(),
    };

    let mut entries = Vec::new();
    for line in &lines[start + 1..] {
        let trimmed = line.trim();
        if trimmed.starts_with("## ") {
            break;
        }
        if let Some(bullet) = trimmed.strip_prefix("- ") {
            let bullet = bullet.trim();
            if !bullet.is_empty() {
                entries.push(bullet.to_string());
            }
        }
    }
    entries
}

/// Finds the line index of the `## [<version>]` header for the given version.
fn section_start(lines: &[&str], version: &str) -> Option<usize> {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(header_version) = header_version(line) {
            if versions_match(&header_version, version) {
                return Some(idx);
            }
        }
    }
    None
}

/// Finds the line index of the `## [Unreleased]` header (case-insensitive).
fn unreleased_start(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| {
        header_version(line)
            .map(|v| v.eq_ignore_ascii_case("unreleased"))
            .unwrap_or(false)
    })
}

/// Extracts the bracketed token from a `## [...]` section header line.
fn header_version(line: &str) -> Option<String> {
    if let Ok(re) = Regex::new(r"^##\s*\[([^\]]+)\]") {
        if let Some(captures) = re.captures(line.trim_start()) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

/// Compares two version strings, tolerating semver-equivalent spellings.
///
/// "1.2.0" matches both "1.2.0" and "v1.2.0" headers; non-semver tokens fall
/// back to exact string comparison.
fn versions_match(header: &str, target: &str) -> bool {
    if header == target {
        return true;
    }

    let parse = |s: &str| {
        semver::Version::parse(s.strip_prefix('v').or_else(|| s.strip_prefix('V')).unwrap_or(s))
            .ok()
    };

    match (parse(header), parse(target)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
