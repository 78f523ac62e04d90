use regex::Regex;

use crate::config::KeywordsConfig;

/// Fixed release-notes categories, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Added,
    Changed,
    Fixed,
    Docs,
    Ci,
    Other,
}

impl Category {
    /// All categories in the order their sections appear in the document.
    pub const ALL: [Category; 6] = [
        Category::Added,
        Category::Changed,
        Category::Fixed,
        Category::Docs,
        Category::Ci,
        Category::Other,
    ];

    /// Section title used in the rendered document.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Added => "Added",
            Category::Changed => "Changed",
            Category::Fixed => "Fixed",
            Category::Docs => "Docs",
            Category::Ci => "CI",
            Category::Other => "Other",
        }
    }

    fn index(&self) -> usize {
        match self {
            Category::Added => 0,
            Category::Changed => 1,
            Category::Fixed => 2,
            Category::Docs => 3,
            Category::Ci => 4,
            Category::Other => 5,
        }
    }
}

/// Entries grouped per category, insertion order preserved within each bucket.
#[derive(Debug, Default)]
pub struct Buckets {
    inner: [Vec<String>; 6],
}

impl Buckets {
    /// Entries in a category's bucket, in the order they were classified.
    pub fn get(&self, category: Category) -> &[String] {
        &self.inner[category.index()]
    }

    fn push(&mut self, category: Category, entry: String) {
        self.inner[category.index()].push(entry);
    }
}

/// Classifies entries into categories by keyword matching.
///
/// Keyword lists are compiled once into case-insensitive, word-bounded
/// alternation patterns. Match precedence is Added, Fixed, Docs, CI, Changed;
/// the first matching rule wins and unmatched entries land in Other, so every
/// entry is classified exactly once.
pub struct Categorizer {
    rules: Vec<(Category, Regex)>,
}

impl Categorizer {
    /// Builds a categorizer from keyword lists.
    ///
    /// Empty keyword lists contribute no rule. A keyword list that fails to
    /// compile (not possible with escaped keywords, but kept total anyway) is
    /// skipped the same way.
    pub fn new(keywords: &KeywordsConfig) -> Self {
        let precedence = [
            (Category::Added, &keywords.added),
            (Category::Fixed, &keywords.fixed),
            (Category::Docs, &keywords.docs),
            (Category::Ci, &keywords.ci),
            (Category::Changed, &keywords.changed),
        ];

        let mut rules = Vec::new();
        for (category, words) in precedence {
            if let Some(re) = compile_keywords(words) {
                rules.push((category, re));
            }
        }

        Categorizer { rules }
    }

    /// Classifies a single entry. Total: always returns a category.
    pub fn categorize(&self, entry: &str) -> Category {
        for (category, re) in &self.rules {
            if re.is_match(entry) {
                return *category;
            }
        }
        Category::Other
    }

    /// Buckets a list of entries, preserving order within each bucket.
    pub fn bucket(&self, entries: &[String]) -> Buckets {
        let mut buckets = Buckets::default();
        for entry in entries {
            let category = self.categorize(entry);
            buckets.push(category, entry.clone());
        }
        buckets
    }
}

/// Compiles a keyword list into a `(?i)\b(a|b|c)\b` pattern.
fn compile_keywords(words: &[String]) -> Option<Regex> {
    if words.is_empty() {
        return None;
    }
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"(?i)\b({})\b", escaped.join("|"))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorizer() -> Categorizer {
        Categorizer::new(&KeywordsConfig::default())
    }

    #[test]
    fn test_feature_entries_are_added() {
        let c = categorizer();
        assert_eq!(c.categorize("feat: sorting presets"), Category::Added);
        assert_eq!(c.categorize("Add GUI launcher"), Category::Added);
    }

    #[test]
    fn test_fix_entries_are_fixed() {
        let c = categorizer();
        assert_eq!(c.categorize("fix: handle empty input"), Category::Fixed);
        assert_eq!(c.categorize("Resolve crash on startup"), Category::Fixed);
    }

    #[test]
    fn test_precedence_feature_beats_fix() {
        let c = categorizer();
        // Contains both "feat" and "fix" words; feature rule is tested first
        assert_eq!(c.categorize("feat: fix-up the parser"), Category::Added);
    }

    #[test]
    fn test_precedence_fix_beats_docs() {
        let c = categorizer();
        assert_eq!(c.categorize("fix typo in docs"), Category::Fixed);
    }

    #[test]
    fn test_word_boundaries_prevent_substring_hits() {
        let c = categorizer();
        // "specific" contains "ci" but must not match the CI rule
        assert_eq!(c.categorize("make tests more specific"), Category::Other);
    }

    #[test]
    fn test_unmatched_entries_fall_to_other() {
        let c = categorizer();
        assert_eq!(c.categorize("misc housekeeping"), Category::Other);
    }

    #[test]
    fn test_case_insensitive() {
        let c = categorizer();
        assert_eq!(c.categorize("FIX: shouting subject"), Category::Fixed);
    }

    #[test]
    fn test_bucket_preserves_insertion_order() {
        let c = categorizer();
        let entries = vec![
            "fix: one".to_string(),
            "feat: two".to_string(),
            "fix: three".to_string(),
        ];
        let buckets = c.bucket(&entries);
        assert_eq!(buckets.get(Category::Fixed), ["fix: one", "fix: three"]);
        assert_eq!(buckets.get(Category::Added), ["feat: two"]);
        assert!(buckets.get(Category::Other).is_empty());
    }

    #[test]
    fn test_every_entry_classified_exactly_once() {
        let c = categorizer();
        let entries: Vec<String> = vec![
            "feat: a".to_string(),
            "fix: b".to_string(),
            "docs: c".to_string(),
            "ci: d".to_string(),
            "refactor: e".to_string(),
            "mystery".to_string(),
        ];
        let buckets = c.bucket(&entries);
        let total: usize = Category::ALL
            .iter()
            .map(|cat| buckets.get(*cat).len())
            .sum();
        assert_eq!(total, entries.len());
    }
}
