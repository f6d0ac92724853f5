use std::path::PathBuf;

use serde::Serialize;

/// A local include that does not start with its directory's prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeViolation {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    /// Suggested include path, without the `#include` and quotes.
    pub suggestion: String,
}

impl IncludeViolation {
    /// `file:line` location string.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}", self.file.display(), self.line)
    }
}
