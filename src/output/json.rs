use serde::Serialize;

use crate::error::Result;
use crate::includes::IncludeViolation;

use super::ViolationFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    count: usize,
    violations: &'a [IncludeViolation],
}

impl ViolationFormatter for JsonFormatter {
    fn format(&self, violations: &[IncludeViolation]) -> Result<String> {
        if violations.is_empty() {
            return Ok(String::new());
        }
        let output = JsonOutput {
            count: violations.len(),
            violations,
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
