mod format;
mod includes;

pub use format::{FormatOptions, check_format, run_format};
pub use includes::{audit_includes, run_includes};
