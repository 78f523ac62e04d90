use regex::Regex;

/// Environment state describing the release being documented.
///
/// Every field is best-effort: resolution never fails, it only degrades to
/// placeholder values ("unknown" tag, empty repository, today's date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    /// Tag name as pushed (e.g., "v1.2.0"), or "unknown" when unresolvable
    pub tag: String,
    /// Tag with a single leading 'v'/'V' stripped (e.g., "1.2.0")
    pub version: String,
    /// ISO calendar date for the heading (YYYY-MM-DD)
    pub date: String,
    /// Repository identifier ("owner/name"), empty when unset
    pub repository: String,
    /// CI structured-output file path, if the runner provides one
    pub output_path: Option<String>,
}

impl ReleaseContext {
    /// Resolves the context from the process environment.
    ///
    /// Reads `GITHUB_REF`, `GITHUB_REF_NAME`, `GITHUB_REPOSITORY`, and
    /// `GITHUB_OUTPUT`. The date defaults to the current local date and can be
    /// replaced later with the tagged commit's date via [ReleaseContext::set_date].
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("GITHUB_REF").ok().as_deref(),
            std::env::var("GITHUB_REF_NAME").ok().as_deref(),
            std::env::var("GITHUB_REPOSITORY").ok().as_deref(),
            std::env::var("GITHUB_OUTPUT").ok().as_deref(),
        )
    }

    /// Resolves the context from explicit values.
    ///
    /// Tag resolution order: `tags/` suffix of the ref variable, then the
    /// plain ref-name variable, then the literal "unknown".
    pub fn resolve(
        github_ref: Option<&str>,
        ref_name: Option<&str>,
        repository: Option<&str>,
        output_path: Option<&str>,
    ) -> Self {
        let tag = github_ref
            .and_then(tag_from_ref)
            .or_else(|| ref_name.map(|s| s.to_string()))
            .unwrap_or_else(|| "unknown".to_string());

        let version = version_from_tag(&tag);

        ReleaseContext {
            tag,
            version,
            date: today(),
            repository: repository.unwrap_or("").to_string(),
            output_path: output_path.map(|s| s.to_string()),
        }
    }

    /// Overrides the heading date, typically with the tagged commit's date.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Overrides the tag and re-derives the version from it.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
        self.version = version_from_tag(&self.tag);
    }
}

/// Extracts the tag name from a fully-qualified ref (e.g., "refs/tags/v1.2.0").
///
/// Returns `None` for refs that do not point at a tag.
pub fn tag_from_ref(github_ref: &str) -> Option<String> {
    if let Ok(re) = Regex::new(r"refs/tags/(.+)$") {
        if let Some(captures) = re.captures(github_ref) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

/// Strips a single leading 'v' or 'V' from a tag to obtain the version string.
pub fn version_from_tag(tag: &str) -> String {
    tag.strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag)
        .to_string()
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_ref() {
        assert_eq!(
            tag_from_ref("refs/tags/v1.2.0"),
            Some("v1.2.0".to_string())
        );
        assert_eq!(tag_from_ref("refs/heads/main"), None);
        assert_eq!(
            tag_from_ref("refs/tags/release-2.0"),
            Some("release-2.0".to_string())
        );
    }

    #[test]
    fn test_version_from_tag_strips_single_prefix() {
        assert_eq!(version_from_tag("v1.2.0"), "1.2.0");
        assert_eq!(version_from_tag("V1.2.0"), "1.2.0");
        assert_eq!(version_from_tag("1.2.0"), "1.2.0");
        // Only one prefix character is removed
        assert_eq!(version_from_tag("vv1.2.0"), "v1.2.0");
    }

    #[test]
    fn test_resolve_prefers_ref_over_ref_name() {
        let ctx = ReleaseContext::resolve(
            Some("refs/tags/v2.0.0"),
            Some("other-name"),
            Some("owner/repo"),
            None,
        );
        assert_eq!(ctx.tag, "v2.0.0");
        assert_eq!(ctx.version, "2.0.0");
        assert_eq!(ctx.repository, "owner/repo");
        assert_eq!(ctx.output_path, None);
    }

    #[test]
    fn test_resolve_falls_back_to_ref_name() {
        let ctx = ReleaseContext::resolve(Some("refs/heads/main"), Some("v0.3.1"), None, None);
        assert_eq!(ctx.tag, "v0.3.1");
        assert_eq!(ctx.version, "0.3.1");
        assert_eq!(ctx.repository, "");
    }

    #[test]
    fn test_resolve_unknown_when_nothing_set() {
        let ctx = ReleaseContext::resolve(None, None, None, None);
        assert_eq!(ctx.tag, "unknown");
        assert_eq!(ctx.version, "unknown");
    }

    #[test]
    fn test_resolve_date_is_iso_formatted() {
        let ctx = ReleaseContext::resolve(None, None, None, None);
        assert_eq!(ctx.date.len(), 10);
        assert_eq!(&ctx.date[4..5], "-");
        assert_eq!(&ctx.date[7..8], "-");
    }

    #[test]
    fn test_set_tag_rederives_version() {
        let mut ctx = ReleaseContext::resolve(None, None, None, None);
        ctx.set_tag("v9.9.9");
        assert_eq!(ctx.tag, "v9.9.9");
        assert_eq!(ctx.version, "9.9.9");
    }
}
