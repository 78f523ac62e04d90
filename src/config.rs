use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-notes.
///
/// Contains the changelog location, the commit cap for history-derived notes,
/// the footer link template, and the category keyword lists.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_changelog_path")]
    pub changelog_path: String,

    #[serde(default = "default_max_commits")]
    pub max_commits: usize,

    #[serde(default = "default_changelog_url")]
    pub changelog_url: String,

    #[serde(default)]
    pub keywords: KeywordsConfig,
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

/// Matches the commit cap used by the CI workflows this tool serves.
fn default_max_commits() -> usize {
    20
}

fn default_changelog_url() -> String {
    "https://github.com/{repo}/blob/main/CHANGELOG.md".to_string()
}

/// Returns the default keywords indicating a new feature.
fn default_added_keywords() -> Vec<String> {
    vec![
        "feat".to_string(),
        "feature".to_string(),
        "add".to_string(),
        "added".to_string(),
        "new".to_string(),
        "introduce".to_string(),
        "implement".to_string(),
        "support".to_string(),
    ]
}

/// Returns the default keywords indicating a bug fix.
fn default_fixed_keywords() -> Vec<String> {
    vec![
        "fix".to_string(),
        "fixed".to_string(),
        "fixes".to_string(),
        "bug".to_string(),
        "patch".to_string(),
        "resolve".to_string(),
        "correct".to_string(),
    ]
}

/// Returns the default keywords indicating documentation work.
fn default_docs_keywords() -> Vec<String> {
    vec![
        "doc".to_string(),
        "docs".to_string(),
        "documentation".to_string(),
        "readme".to_string(),
        "comment".to_string(),
        "comments".to_string(),
    ]
}

/// Returns the default keywords indicating CI or workflow changes.
fn default_ci_keywords() -> Vec<String> {
    vec![
        "ci".to_string(),
        "cd".to_string(),
        "workflow".to_string(),
        "workflows".to_string(),
        "pipeline".to_string(),
        "action".to_string(),
        "actions".to_string(),
    ]
}

/// Returns the default keywords indicating a behavioral or internal change.
fn default_changed_keywords() -> Vec<String> {
    vec![
        "refactor".to_string(),
        "change".to_string(),
        "changed".to_string(),
        "update".to_string(),
        "updated".to_string(),
        "improve".to_string(),
        "rework".to_string(),
        "bump".to_string(),
        "rename".to_string(),
        "move".to_string(),
    ]
}

/// Keyword lists driving entry categorization.
///
/// Lists are tested in fixed precedence order: added, fixed, docs, ci, changed.
/// An entry matching none of them falls into the Other bucket.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct KeywordsConfig {
    #[serde(default = "default_added_keywords")]
    pub added: Vec<String>,

    #[serde(default = "default_fixed_keywords")]
    pub fixed: Vec<String>,

    #[serde(default = "default_docs_keywords")]
    pub docs: Vec<String>,

    #[serde(default = "default_ci_keywords")]
    pub ci: Vec<String>,

    #[serde(default = "default_changed_keywords")]
    pub changed: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        KeywordsConfig {
            added: default_added_keywords(),
            fixed: default_fixed_keywords(),
            docs: default_docs_keywords(),
            ci: default_ci_keywords(),
            changed: default_changed_keywords(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog_path: default_changelog_path(),
            max_commits: default_max_commits(),
            changelog_url: default_changelog_url(),
            keywords: KeywordsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-notes.toml` in current directory
/// 3. `release-notes.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release-notes.toml").exists() {
        fs::read_to_string("./release-notes.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("release-notes.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog_path, "CHANGELOG.md");
        assert_eq!(config.max_commits, 20);
        assert!(config.changelog_url.contains("{repo}"));
    }

    #[test]
    fn test_default_keywords_precedence_sets() {
        let keywords = KeywordsConfig::default();
        assert!(keywords.added.contains(&"feat".to_string()));
        assert!(keywords.fixed.contains(&"fix".to_string()));
        assert!(keywords.docs.contains(&"docs".to_string()));
        assert!(keywords.ci.contains(&"workflow".to_string()));
        assert!(keywords.changed.contains(&"refactor".to_string()));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("max_commits = 5").unwrap();
        assert_eq!(config.max_commits, 5);
        assert_eq!(config.changelog_path, "CHANGELOG.md");
        assert!(config.keywords.added.contains(&"feat".to_string()));
    }
}
