//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Summary length bounds.
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Detail sub-line limits.
    #[serde(default)]
    pub details: DetailConfig,

    /// Trivial-commit filter configuration.
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot produce a sensible report.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        let bounds = [
            ("summary.highlight_max", self.summary.highlight_max),
            ("summary.challenge_max", self.summary.challenge_max),
            ("summary.normal_max", self.summary.normal_max),
        ];
        for (key, value) in bounds {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must be positive",
                });
            }
        }

        if self.report.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "report.title",
                reason: "must not be empty",
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title word, rendered as `# {title} ({range})`.
    #[serde(default = "default_title")]
    pub title: String,

    /// Heading of the free-text supplements section.
    #[serde(default = "default_other_heading")]
    pub other_heading: String,

    /// Prefix each summary with its type label.
    #[serde(default)]
    pub render_labels: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            other_heading: default_other_heading(),
            render_labels: false,
        }
    }
}

fn default_title() -> String {
    "周报".to_string()
}

fn default_other_heading() -> String {
    "其他".to_string()
}

/// Maximum summary length per significance level, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Bound for highlight entries.
    #[serde(default = "default_highlight_max")]
    pub highlight_max: usize,

    /// Bound for challenge entries that are not highlights.
    #[serde(default = "default_challenge_max")]
    pub challenge_max: usize,

    /// Bound for all other entries.
    #[serde(default = "default_normal_max")]
    pub normal_max: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            highlight_max: default_highlight_max(),
            challenge_max: default_challenge_max(),
            normal_max: default_normal_max(),
        }
    }
}

fn default_highlight_max() -> usize {
    30
}

fn default_challenge_max() -> usize {
    25
}

fn default_normal_max() -> usize {
    20
}

/// Number of detail sub-lines kept per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailConfig {
    /// Limit for highlight or challenge entries.
    #[serde(default = "default_significant_limit")]
    pub significant_limit: usize,

    /// Limit for all other entries.
    #[serde(default = "default_normal_limit")]
    pub normal_limit: usize,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            significant_limit: default_significant_limit(),
            normal_limit: default_normal_limit(),
        }
    }
}

fn default_significant_limit() -> usize {
    3
}

fn default_normal_limit() -> usize {
    1
}

/// Trivial-commit filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Commits changing fewer lines than this are dropped.
    #[serde(default = "default_small_change_threshold")]
    pub small_change_threshold: usize,

    /// Commits touching only these files are dropped. Compared by file name.
    #[serde(default = "default_trivial_files")]
    pub trivial_files: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            small_change_threshold: default_small_change_threshold(),
            trivial_files: default_trivial_files(),
        }
    }
}

fn default_small_change_threshold() -> usize {
    10
}

fn default_trivial_files() -> Vec<String> {
    [
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        ".gitignore",
        ".editorconfig",
        ".prettierrc",
        ".prettierignore",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
