//! External formatter invocation and the per-file format check.

mod check;

pub use check::{FileOutcome, FormatChecker, FormatReport};

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::{CxxGuardError, Result};

/// Produces the canonical content of a source file.
pub trait Formatter {
    /// Return the formatted content of `path` without modifying it.
    ///
    /// # Errors
    /// Returns an error if the formatter cannot run or reports failure.
    fn format(&self, path: &Path) -> Result<Vec<u8>>;

    /// Confirm the formatter can be invoked at all.
    ///
    /// # Errors
    /// Returns [`CxxGuardError::FormatterNotFound`] when it cannot.
    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }
}

/// Runs `<program> <path>` and takes its standard output.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
}

impl ExternalFormatter {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Formatter for ExternalFormatter {
    fn ensure_available(&self) -> Result<()> {
        match find_executable(&self.program) {
            Some(path) => {
                debug!(path = %path.display(), "found formatter");
                Ok(())
            }
            None => Err(CxxGuardError::FormatterNotFound(self.program.clone())),
        }
    }

    fn format(&self, path: &Path) -> Result<Vec<u8>> {
        debug!(program = %self.program, path = %path.display(), "running formatter");
        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|source| CxxGuardError::FormatterSpawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(CxxGuardError::FormatterFailed {
                path: path.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

/// Locate `program` the way a shell would.
///
/// Names containing a path separator are checked as given; bare names are
/// searched in each `PATH` entry.
#[must_use]
pub fn find_executable(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }
    let path_var = std::env::var_os("PATH")?;
    find_in_paths(program, std::env::split_paths(&path_var))
}

fn find_in_paths(program: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .flat_map(|dir| executable_names(program).map(move |name| dir.join(name)))
        .find(|path| is_executable(path))
}

#[cfg(windows)]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    let has_ext = Path::new(program).extension().is_some_and(|e| !e.is_empty());
    std::iter::once(program.to_string())
        .chain((!has_ext).then(|| format!("{program}.exe")))
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(program.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
