use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Remote branch diffed against when the repository has only one commit.
pub const DEFAULT_BASE_REF: &str = "origin/dev";

/// Top-level policy file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub format: FormatPolicy,
}

/// Settings for `check-format`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormatPolicy {
    /// Formatter executable, invoked as `<formatter> <path>`.
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Fallback baseline for single-commit repositories.
    #[serde(default = "default_base_ref")]
    pub base_ref: String,

    /// File extensions to check, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path prefixes that are never checked...
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// ...unless they also start with one of these.
    #[serde(default = "default_include")]
    pub include: Vec<String>,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            formatter: default_formatter(),
            base_ref: default_base_ref(),
            extensions: default_extensions(),
            exclude: default_exclude(),
            include: default_include(),
        }
    }
}

impl FormatPolicy {
    /// Strip any leading dots so `".cc"` and `"cc"` are equivalent.
    pub fn normalize(&mut self) {
        for ext in &mut self.extensions {
            let trimmed = ext.trim_start_matches('.');
            if trimmed.len() != ext.len() {
                *ext = trimmed.to_string();
            }
        }
    }
}

fn default_formatter() -> String {
    DEFAULT_FORMATTER.to_string()
}

fn default_base_ref() -> String {
    DEFAULT_BASE_REF.to_string()
}

#[must_use]
pub fn default_extensions() -> Vec<String> {
    ["c", "cpp", "cc", "h", "hpp"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[must_use]
pub fn default_exclude() -> Vec<String> {
    ["third_party/", "src/rtsvm/", "src/rts/", "test/rtsvm/"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[must_use]
pub fn default_include() -> Vec<String> {
    vec!["src/rtsvm/vm/heap/".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
