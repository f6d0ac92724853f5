//! Audit of double-quoted local includes against a directory's expected prefix.

mod violation;

pub use violation::IncludeViolation;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};
use crate::{CxxGuardError, Result};

/// Matches `#include "path/to/header.h"`; angle-bracket includes never match.
pub const LOCAL_INCLUDE_PATTERN: &str = r#"#include\s*"([^"]+\.h)""#;

/// File name suffixes that are scanned.
pub const SCANNED_SUFFIXES: [&str; 2] = [".cc", ".h"];

/// A directory and the prefix every local include inside it must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRule {
    pub directory: PathBuf,
    pub prefix: String,
}

impl DirectoryRule {
    /// Pair up `DIR PREFIX DIR PREFIX ...` arguments.
    ///
    /// # Errors
    /// Returns [`CxxGuardError::UnpairedArguments`] for an odd number of arguments.
    pub fn from_pairs<S: AsRef<str>>(args: &[S]) -> Result<Vec<Self>> {
        if args.len() % 2 != 0 {
            return Err(CxxGuardError::UnpairedArguments);
        }
        Ok(args
            .chunks_exact(2)
            .map(|pair| Self {
                directory: PathBuf::from(pair[0].as_ref()),
                prefix: pair[1].as_ref().to_string(),
            })
            .collect())
    }
}

/// Build the replacement include for `included` under `prefix`.
#[must_use]
pub fn suggest_include(prefix: &str, included: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}.../{included}")
    } else {
        format!("{prefix}/.../{included}")
    }
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

pub struct IncludeChecker {
    pattern: Regex,
}

impl IncludeChecker {
    /// # Errors
    /// Returns an error if the include pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(LOCAL_INCLUDE_PATTERN).map_err(|source| CxxGuardError::InvalidPattern {
                pattern: LOCAL_INCLUDE_PATTERN.to_string(),
                source,
            })?;
        Ok(Self { pattern })
    }

    /// Check already-loaded file content. Line numbers are 1-based.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    #[must_use]
    pub fn check_content(&self, file: &Path, content: &str, prefix: &str) -> Vec<IncludeViolation> {
        normalize_newlines(content)
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let included = self.pattern.captures(line)?.get(1)?.as_str();
                if included.starts_with(prefix) {
                    return None;
                }
                Some(IncludeViolation {
                    file: file.to_path_buf(),
                    line: idx + 1,
                    content: line.trim().to_string(),
                    suggestion: suggest_include(prefix, included),
                })
            })
            .collect()
    }

    /// Read and check one file. Invalid UTF-8 is replaced, not rejected.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, file: &Path, prefix: &str) -> Result<Vec<IncludeViolation>> {
        let bytes = std::fs::read(file).map_err(|source| CxxGuardError::FileRead {
            path: file.to_path_buf(),
            source,
        })?;
        Ok(self.check_content(file, &String::from_utf8_lossy(&bytes), prefix))
    }

    /// Walk every rule's directory and collect violations in rule order.
    ///
    /// # Errors
    /// Returns an error if a scanned file cannot be read.
    pub fn audit(&self, rules: &[DirectoryRule]) -> Result<Vec<IncludeViolation>> {
        let scanner = DirectoryScanner::new(SuffixFilter::new(SCANNED_SUFFIXES));
        let mut violations = Vec::new();
        for rule in rules {
            let files = scanner.scan(&rule.directory)?;
            debug!(
                directory = %rule.directory.display(),
                prefix = %rule.prefix,
                files = files.len(),
                "scanning"
            );
            for file in files {
                violations.extend(self.check_file(&file, &rule.prefix)?);
            }
        }
        Ok(violations)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
