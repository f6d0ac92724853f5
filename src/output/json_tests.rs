use std::path::PathBuf;

use super::*;

#[test]
fn json_lists_violations_with_count() {
    let violations = vec![IncludeViolation {
        file: PathBuf::from("src/foo.h"),
        line: 7,
        content: "#include \"bar.h\"".to_string(),
        suggestion: "p/.../bar.h".to_string(),
    }];
    let output = JsonFormatter.format(&violations).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["violations"][0]["file"], "src/foo.h");
    assert_eq!(parsed["violations"][0]["line"], 7);
    assert_eq!(parsed["violations"][0]["content"], "#include \"bar.h\"");
    assert_eq!(parsed["violations"][0]["suggestion"], "p/.../bar.h");
}

#[test]
fn json_empty_is_silent() {
    assert_eq!(JsonFormatter.format(&[]).unwrap(), "");
}
