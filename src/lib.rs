pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatter;
pub mod git;
pub mod includes;
pub mod logging;
pub mod output;
pub mod scanner;

pub use error::{CxxGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
