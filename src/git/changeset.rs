//! Resolves the set of files changed relative to a baseline revision.

use tracing::{debug, warn};

use crate::{CxxGuardError, Result};

use super::runner::GitRunner;

/// Revision the committed changes are measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Baseline {
    /// `HEAD~1..HEAD`, used when the repository has more than one commit.
    PreviousCommit,
    /// A remote reference, used for fresh or shallow clones with a single commit.
    Remote(String),
}

impl Baseline {
    fn diff_args(&self) -> Vec<&str> {
        match self {
            Self::PreviousCommit => {
                vec!["diff", "--name-only", "--diff-filter=d", "HEAD~1", "HEAD"]
            }
            Self::Remote(base) => {
                vec!["diff", "--name-only", "--diff-filter=d", base.as_str(), "--", "."]
            }
        }
    }
}

pub struct ChangeSetResolver<'a, G: GitRunner> {
    git: &'a G,
    base_ref: String,
}

impl<'a, G: GitRunner> ChangeSetResolver<'a, G> {
    #[must_use]
    pub fn new(git: &'a G, base_ref: impl Into<String>) -> Self {
        Self {
            git,
            base_ref: base_ref.into(),
        }
    }

    /// Whether git considers the current directory part of a working tree.
    ///
    /// A git binary that cannot be spawned counts as "no".
    #[must_use]
    pub fn is_work_tree(&self) -> bool {
        self.git
            .run(&["rev-parse", "--is-inside-work-tree"])
            .is_ok_and(|out| out.success())
    }

    /// Number of commits reachable from HEAD, `None` if git cannot tell.
    #[must_use]
    pub fn commit_count(&self) -> Option<u64> {
        let out = self.git.run(&["rev-list", "--count", "HEAD"]).ok()?;
        if !out.success() {
            return None;
        }
        out.stdout.trim().parse().ok()
    }

    /// Pick the baseline and, for the remote fallback, make sure it is reachable.
    ///
    /// # Errors
    /// Returns [`CxxGuardError::BaseRefMissing`] if the remote base cannot be resolved.
    pub fn select_baseline(&self) -> Result<Baseline> {
        if self.commit_count().is_some_and(|count| count > 1) {
            return Ok(Baseline::PreviousCommit);
        }

        debug!(base = %self.base_ref, "single commit, falling back to remote base");
        match self.git.run(&["fetch"]) {
            Ok(out) if out.success() => {}
            Ok(out) => warn!(stderr = %out.stderr.trim(), "git fetch failed"),
            Err(e) => warn!(error = %e, "git fetch failed"),
        }

        let revision = format!("{}^{{commit}}", self.base_ref);
        let verified = self
            .git
            .run(&["rev-parse", "--verify", "--quiet", &revision])?
            .success();
        if !verified {
            return Err(CxxGuardError::BaseRefMissing(self.base_ref.clone()));
        }
        Ok(Baseline::Remote(self.base_ref.clone()))
    }

    /// Committed, unstaged and staged changes, concatenated in that order.
    ///
    /// Duplicates are kept.
    ///
    /// # Errors
    /// Returns [`CxxGuardError::GitCommand`] for the first query that exits non-zero.
    pub fn changed_files(&self) -> Result<Vec<String>> {
        let baseline = self.select_baseline()?;
        let mut files = self.query("changed files", &baseline.diff_args())?;
        files.extend(self.query(
            "uncommitted files",
            &["diff", "--name-only", "--diff-filter=d"],
        )?);
        files.extend(self.query("staged files", &["diff", "--cached", "--name-only"])?);
        Ok(files)
    }

    fn query(&self, what: &'static str, args: &[&str]) -> Result<Vec<String>> {
        let out = self.git.run(args)?;
        if !out.success() {
            return Err(CxxGuardError::GitCommand {
                what,
                code: out.code,
                stderr: out.stderr.trim_end().to_string(),
            });
        }
        Ok(out.stdout.split_whitespace().map(String::from).collect())
    }
}

#[cfg(test)]
#[path = "changeset_tests.rs"]
mod tests;
