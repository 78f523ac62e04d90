//! Markdown document assembly.

use crate::categorize::{Buckets, Category};
use crate::context::ReleaseContext;

/// Renders the release-notes document.
///
/// Layout: a heading with tag and date, a Highlights section holding the
/// first entry in original source order, one section per non-empty category
/// in declaration order, and a footer link to the full changelog.
///
/// # Arguments
/// * `ctx` - Release context (tag, date, repository)
/// * `entries` - All entries in original source order
/// * `buckets` - The same entries, categorized
/// * `url_template` - Footer link template with a `{repo}` placeholder
pub fn render(
    ctx: &ReleaseContext,
    entries: &[String],
    buckets: &Buckets,
    url_template: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    let tag = if ctx.tag.is_empty() {
        "untagged"
    } else {
        ctx.tag.as_str()
    };
    lines.push(format!("## {} — {}", tag, ctx.date));
    lines.push(String::new());

    if let Some(first) = entries.first() {
        lines.push("### Highlights".to_string());
        lines.push(String::new());
        lines.push(format!("- {}", first));
        lines.push(String::new());
    }

    for category in Category::ALL {
        let bucket = buckets.get(category);
        if bucket.is_empty() {
            continue;
        }
        lines.push(format!("### {}", category.title()));
        lines.push(String::new());
        for entry in bucket {
            lines.push(format!("- {}", entry));
        }
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    let url = url_template.replace("{repo}", &ctx.repository);
    lines.push(format!("[Full changelog]({})", url));

    lines.join("\n")
}
