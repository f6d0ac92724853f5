use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CxxGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not available. Please install it or check your PATH.")]
    FormatterNotFound(String),

    #[error("Current directory is not a git repository.")]
    NotAGitRepository,

    #[error("Base reference '{0}' not found")]
    BaseRefMissing(String),

    #[error("Each directory must have a corresponding prefix")]
    UnpairedArguments,

    #[error("Failed to get {what} from git. Error message: {stderr}")]
    GitCommand {
        what: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to run git {args}")]
    GitSpawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run formatter {program}")]
    FormatterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Formatter exited with {} on {}: {stderr}", exit_status(*.code), .path.display())]
    FormatterFailed {
        path: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

fn exit_status(code: Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| format!("status {c}"))
}

impl CxxGuardError {
    /// Process exit code to report for this error.
    ///
    /// Git query failures propagate git's own status; everything else is 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::GitCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => crate::EXIT_FAILURE,
        }
    }

    /// Display message followed by every underlying cause.
    #[must_use]
    pub fn detail(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, CxxGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
