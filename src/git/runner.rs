//! Thin wrapper around the `git` command-line interface.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::{CxxGuardError, Result};

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit code, `None` when git was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Runs git sub-commands.
pub trait GitRunner {
    /// Run `git <args>` and capture its output.
    ///
    /// A non-zero exit is reported through [`GitOutput::code`], not as an error.
    ///
    /// # Errors
    /// Returns an error if git cannot be spawned.
    fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

/// [`GitRunner`] backed by the `git` binary on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current working directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { workdir: None }
    }

    /// Run git inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            workdir: Some(dir.to_path_buf()),
        }
    }
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        debug!(args = %args.join(" "), "running git");
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }
        let output = command.output().map_err(|source| CxxGuardError::GitSpawn {
            args: args.join(" "),
            source,
        })?;
        let result = GitOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(code = ?result.code, "git finished");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
