use std::io::Write;

use crate::cli::{IncludesCli, ReportFormat};
use crate::includes::{DirectoryRule, IncludeChecker};
use crate::output::{ColorMode, JsonFormatter, TextFormatter, ViolationFormatter};
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

pub fn run_includes(cli: &IncludesCli) -> i32 {
    let formatter: Box<dyn ViolationFormatter> = match cli.format {
        ReportFormat::Text => Box::new(TextFormatter::new(ColorMode::from(cli.color))),
        ReportFormat::Json => Box::new(JsonFormatter),
    };
    let mut stdout = std::io::stdout().lock();
    match audit_includes(&cli.pairs, formatter.as_ref(), &mut stdout) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let _ = writeln!(stdout, "Error: {}", e.detail());
            e.exit_code()
        }
    }
}

/// Audit `DIR PREFIX` pairs and return the process exit code.
///
/// Nothing is written when no violation is found.
///
/// # Errors
/// Returns an error for an odd number of arguments (before any directory
/// is walked) or when a scanned file cannot be read.
pub fn audit_includes<S: AsRef<str>>(
    pairs: &[S],
    formatter: &dyn ViolationFormatter,
    out: &mut impl Write,
) -> Result<i32> {
    let rules = DirectoryRule::from_pairs(pairs)?;
    let violations = IncludeChecker::new()?.audit(&rules)?;
    if violations.is_empty() {
        return Ok(EXIT_SUCCESS);
    }
    write!(out, "{}", formatter.format(&violations)?)?;
    Ok(EXIT_FAILURE)
}

#[cfg(test)]
#[path = "includes_tests.rs"]
mod tests;
