use std::io::Write;

use crate::cli::FormatCli;
use crate::config::{ConfigLoader, FileConfigLoader, FormatPolicy};
use crate::formatter::{ExternalFormatter, FormatChecker, Formatter};
use crate::git::{ChangeSetResolver, GitCli, GitRunner};
use crate::output::{ColorMode, TextFormatter};
use crate::scanner::ChangeFilter;
use crate::{CxxGuardError, EXIT_FAILURE, EXIT_SUCCESS, Result};

/// Settings for one `check-format` run.
pub struct FormatOptions {
    pub auto_fix: bool,
    pub base_ref: String,
    pub filter: ChangeFilter,
}

impl FormatOptions {
    #[must_use]
    pub fn from_policy(policy: &FormatPolicy, auto_fix: bool) -> Self {
        Self {
            auto_fix,
            base_ref: policy.base_ref.clone(),
            filter: ChangeFilter::from_policy(policy),
        }
    }
}

pub fn run_format(cli: &FormatCli) -> i32 {
    let text = TextFormatter::new(ColorMode::from(cli.color));
    let mut stdout = std::io::stdout().lock();
    match run_format_impl(cli, &text, &mut stdout) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let _ = writeln!(stdout, "{}", text.red(&e.detail()));
            e.exit_code()
        }
    }
}

fn run_format_impl(cli: &FormatCli, text: &TextFormatter, out: &mut impl Write) -> Result<i32> {
    let policy = load_policy(cli)?;
    let formatter = ExternalFormatter::new(policy.formatter.clone());
    let options = FormatOptions::from_policy(&policy, cli.auto_format);
    check_format(&GitCli::new(), &formatter, &options, text, out)
}

/// Config file (if any) with command-line overrides applied.
fn load_policy(cli: &FormatCli) -> Result<FormatPolicy> {
    let mut policy = FileConfigLoader::new()
        .load_optional(cli.config.as_deref())?
        .format;
    if let Some(formatter) = &cli.formatter {
        policy.formatter.clone_from(formatter);
    }
    if let Some(base_ref) = &cli.base_ref {
        policy.base_ref.clone_from(base_ref);
    }
    Ok(policy)
}

/// Check the change set and return the process exit code.
///
/// Prerequisites are verified before any file is listed: the formatter
/// first, then the git working tree.
///
/// # Errors
/// Returns prerequisite and git query errors; per-file problems are
/// reported in the output and reflected in the exit code instead.
pub fn check_format<G: GitRunner, F: Formatter>(
    git: &G,
    formatter: &F,
    options: &FormatOptions,
    text: &TextFormatter,
    out: &mut impl Write,
) -> Result<i32> {
    formatter.ensure_available()?;

    let resolver = ChangeSetResolver::new(git, options.base_ref.clone());
    if !resolver.is_work_tree() {
        return Err(CxxGuardError::NotAGitRepository);
    }

    writeln!(out, "Retrieving list of changed files since last commit...")?;
    let files = options.filter.apply(resolver.changed_files()?);
    write!(out, "{}", text.changed_files(&files))?;

    let mut progress = Ok(());
    let report = FormatChecker::new(formatter, options.auto_fix).run(&files, |path, outcome| {
        if progress.is_err() {
            return;
        }
        if let Some(line) = text.outcome(path, outcome) {
            progress = writeln!(out, "{line}");
        }
    });
    progress?;

    write!(out, "{}", text.summary(&report))?;
    Ok(if report.has_failures() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    })
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
