use std::path::Path;

use crate::config::FormatPolicy;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects changed files for the format check.
///
/// Paths are compared as forward-slash strings, so prefixes match the way
/// git prints them (`src/rts/` does not match `src/rtsvm/x.cc`).
pub struct ChangeFilter {
    extensions: Vec<String>,
    exclude: Vec<String>,
    include: Vec<String>,
}

impl ChangeFilter {
    #[must_use]
    pub const fn new(extensions: Vec<String>, exclude: Vec<String>, include: Vec<String>) -> Self {
        Self {
            extensions,
            exclude,
            include,
        }
    }

    #[must_use]
    pub fn from_policy(policy: &FormatPolicy) -> Self {
        Self::new(
            policy.extensions.clone(),
            policy.exclude.clone(),
            policy.include.clone(),
        )
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &str) -> bool {
        let excluded = self.exclude.iter().any(|p| path.starts_with(p.as_str()));
        excluded && !self.include.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Keep the paths that pass the filter, preserving order.
    #[must_use]
    pub fn apply(&self, paths: Vec<String>) -> Vec<String> {
        paths
            .into_iter()
            .filter(|p| self.should_include(Path::new(p)))
            .collect()
    }
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::from_policy(&FormatPolicy::default())
    }
}

impl FileFilter for ChangeFilter {
    fn should_include(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.has_valid_extension(path) && !self.is_excluded(&path_str)
    }
}

/// Accepts files whose name ends with one of the given suffixes.
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    #[must_use]
    pub fn new<S: Into<String>>(suffixes: impl IntoIterator<Item = S>) -> Self {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|s| name.ends_with(s.as_str())))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
