use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Report format for the include auditor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "check-format")]
#[command(author, version, about = "Check changed C/C++ files against the formatter")]
#[command(long_about = "Runs the formatter on every C/C++ file changed since the previous \
    commit (plus unstaged and staged changes) and reports files whose content differs.\n\n\
    Exit codes:\n  \
    0 - All changed files are formatted\n  \
    1 - Unformatted files found, or a prerequisite is missing\n  \
    N - A git query failed with exit code N")]
pub struct FormatCli {
    /// Automatically format unformatted files
    #[arg(long)]
    pub auto_format: bool,

    /// Formatter executable (default: clang-format)
    #[arg(long)]
    pub formatter: Option<String>,

    /// Base reference used when the repository has a single commit (default: origin/dev)
    #[arg(long)]
    pub base_ref: Option<String>,

    /// Path to a TOML policy file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(name = "check-includes")]
#[command(author, version, about = "Report local includes that miss their directory prefix")]
#[command(long_about = "Scans .cc and .h files under each DIR for #include \"...\" directives \
    whose path does not start with the matching PREFIX.\n\n\
    Exit codes:\n  \
    0 - No invalid includes\n  \
    1 - Invalid includes found, or arguments are not DIR PREFIX pairs")]
pub struct IncludesCli {
    /// Alternating directory and expected include prefix: DIR PREFIX [DIR PREFIX]...
    #[arg(value_name = "DIR PREFIX", allow_hyphen_values = true)]
    pub pairs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
