use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{CxxGuardError, Result};

use super::Formatter;

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content already equals the formatter output.
    Formatted,
    /// Content differs and auto-fix is off.
    Unformatted,
    /// Content differed and was overwritten with the formatter output.
    Fixed,
    /// The file could not be checked or rewritten.
    Error(String),
}

impl FileOutcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Unformatted | Self::Error(_))
    }
}

/// Outcomes of one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl FormatReport {
    /// Files that are unformatted or errored.
    pub fn failed(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_failure())
            .map(|(path, _)| path.as_path())
    }

    /// Files rewritten in auto-fix mode.
    pub fn fixed(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == FileOutcome::Fixed)
            .map(|(path, _)| path.as_path())
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

pub struct FormatChecker<'a, F: Formatter> {
    formatter: &'a F,
    auto_fix: bool,
}

impl<'a, F: Formatter> FormatChecker<'a, F> {
    #[must_use]
    pub const fn new(formatter: &'a F, auto_fix: bool) -> Self {
        Self {
            formatter,
            auto_fix,
        }
    }

    /// Compare `path` with the formatter output, rewriting it in auto-fix mode.
    ///
    /// Errors are folded into [`FileOutcome::Error`]; the file is never
    /// written unless the formatter succeeded.
    #[must_use]
    pub fn check_file(&self, path: &Path) -> FileOutcome {
        self.try_check_file(path)
            .unwrap_or_else(|e| FileOutcome::Error(e.detail()))
    }

    fn try_check_file(&self, path: &Path) -> Result<FileOutcome> {
        let formatted = self.formatter.format(path)?;
        let content = std::fs::read(path).map_err(|source| CxxGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if formatted == content {
            return Ok(FileOutcome::Formatted);
        }
        if !self.auto_fix {
            return Ok(FileOutcome::Unformatted);
        }

        std::fs::write(path, &formatted).map_err(|source| CxxGuardError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FileOutcome::Fixed)
    }

    /// Check every file in order, reporting each outcome as it is produced.
    pub fn run<P: AsRef<Path>>(
        &self,
        files: &[P],
        mut on_outcome: impl FnMut(&Path, &FileOutcome),
    ) -> FormatReport {
        let mut report = FormatReport::default();
        for file in files {
            let path = file.as_ref();
            let outcome = self.check_file(path);
            debug!(path = %path.display(), ?outcome, "checked");
            on_outcome(path, &outcome);
            report.outcomes.push((path.to_path_buf(), outcome));
        }
        report
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
