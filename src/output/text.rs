use std::fmt::Write;
use std::path::Path;

use crate::error::Result;
use crate::formatter::{FileOutcome, FormatReport};
use crate::includes::IncludeViolation;

use super::{ColorMode, ViolationFormatter, ansi};

/// Human-readable messages for both tools.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self { use_colors: false }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    #[must_use]
    pub fn red(&self, text: &str) -> String {
        self.paint(text, ansi::RED)
    }

    #[must_use]
    pub fn green(&self, text: &str) -> String {
        self.paint(text, ansi::GREEN)
    }

    #[must_use]
    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, ansi::YELLOW)
    }

    /// Listing printed after the change set has been filtered.
    #[must_use]
    pub fn changed_files(&self, files: &[String]) -> String {
        if files.is_empty() {
            return format!(
                "{}\n",
                self.green("No files changed that require format checking.")
            );
        }
        let mut output = String::from("Files changed (relevant to format check):\n");
        for file in files {
            let _ = writeln!(output, "{}", self.green(&format!(" - {file}")));
        }
        output
    }

    /// Progress line for a single file, if the outcome warrants one.
    #[must_use]
    pub fn outcome(&self, path: &Path, outcome: &FileOutcome) -> Option<String> {
        match outcome {
            FileOutcome::Formatted | FileOutcome::Unformatted => None,
            FileOutcome::Fixed => {
                Some(self.yellow(&format!("Automatically formatted {}", path.display())))
            }
            FileOutcome::Error(message) => Some(self.red(&format!(
                "Error checking/formatting file {}: {message}",
                path.display()
            ))),
        }
    }

    /// Final summary: numbered failures, or the success message.
    #[must_use]
    pub fn summary(&self, report: &FormatReport) -> String {
        let failed: Vec<_> = report.failed().collect();
        let mut output = String::new();
        if !failed.is_empty() {
            let _ = writeln!(
                output,
                "{}",
                self.red(&format!(
                    "Found {} file(s) that are not formatted correctly:",
                    failed.len()
                ))
            );
            for (i, path) in failed.iter().enumerate() {
                let _ = writeln!(output, "{}", self.red(&format!("{}. {}", i + 1, path.display())));
            }
            return output;
        }

        let fixed = report.fixed().count();
        if fixed > 0 {
            let _ = writeln!(
                output,
                "{}",
                self.yellow(&format!("Automatically formatted {fixed} file(s)."))
            );
        }
        let _ = writeln!(
            output,
            "{}",
            self.green("All changed files are formatted correctly.")
        );
        output
    }
}

impl ViolationFormatter for TextFormatter {
    fn format(&self, violations: &[IncludeViolation]) -> Result<String> {
        if violations.is_empty() {
            return Ok(String::new());
        }
        let mut output = String::new();
        let _ = writeln!(
            output,
            "{}",
            self.red(&format!("Found {} invalid include(s):", violations.len()))
        );
        for violation in violations {
            let _ = writeln!(output, "{}", violation.location());
            let _ = writeln!(output, "  {}", violation.content);
            let _ = writeln!(output, "  Suggestion: #include \"{}\"", violation.suggestion);
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
