//! Integration tests for the `check-includes` binary.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn odd_argument_count_fails_immediately() {
    check_includes!()
        .arg("src")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Each directory must have a corresponding prefix",
        ));
}

#[test]
fn no_violations_is_silent_success() {
    let fixture = TestFixture::new();
    fixture.create_file("src/foo.h", "#include \"myproj/src/bar.h\"\n#include <vector>\n");

    check_includes!()
        .current_dir(fixture.path())
        .args(["src", "myproj/src"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn violation_is_reported_with_suggestion() {
    let fixture = TestFixture::new();
    fixture.create_file("src/foo.h", "#pragma once\n#include \"bar.h\"\n");

    check_includes!()
        .current_dir(fixture.path())
        .args(["src", "myproj/src"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 invalid include(s):"))
        .stdout(predicate::str::contains("src/foo.h:2"))
        .stdout(predicate::str::contains("  #include \"bar.h\""))
        .stdout(predicate::str::contains(
            "  Suggestion: #include \"myproj/src/.../bar.h\"",
        ));
}

#[test]
fn multiple_pairs_are_counted_together() {
    let fixture = TestFixture::new();
    fixture.create_file("core/a.cc", "#include \"a.h\"\n");
    fixture.create_file("util/b.h", "#include \"b.h\"\n#include \"util/c.h\"\n");
    fixture.create_file("util/skip.cpp", "#include \"skip.h\"\n");

    check_includes!()
        .current_dir(fixture.path())
        .args(["core", "proj/core/", "util", "util"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 2 invalid include(s):"))
        .stdout(predicate::str::contains("proj/core/.../a.h"))
        .stdout(predicate::str::contains("util/.../b.h"))
        .stdout(predicate::str::contains("skip.h").not());
}

#[test]
fn json_format_output() {
    let fixture = TestFixture::new();
    fixture.create_file("src/foo.cc", "#include \"bar.h\"\n");

    let output = check_includes!()
        .current_dir(fixture.path())
        .args(["--format", "json", "src", "p"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["violations"][0]["line"], 1);
    assert_eq!(parsed["violations"][0]["suggestion"], "p/.../bar.h");
}

#[test]
fn no_arguments_succeeds() {
    check_includes!().assert().success().stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_header_is_scanned() {
    let fixture = TestFixture::new();
    fixture.create_file("real.h", "#include \"bar.h\"\n");
    std::fs::create_dir(fixture.path().join("src")).unwrap();
    std::os::unix::fs::symlink("../real.h", fixture.path().join("src/link.h")).unwrap();

    check_includes!()
        .current_dir(fixture.path())
        .args(["src", "p"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 invalid include(s):"))
        .stdout(predicate::str::contains("src/link.h:1"));
}

#[test]
fn file_given_as_directory_is_silent() {
    let fixture = TestFixture::new();
    fixture.create_file("foo.h", "#include \"bar.h\"\n");

    check_includes!()
        .current_dir(fixture.path())
        .args(["foo.h", "p"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn hyphen_prefix_is_a_value() {
    let fixture = TestFixture::new();
    fixture.create_file("src/foo.cc", "#include \"bar.h\"\n");

    check_includes!()
        .current_dir(fixture.path())
        .args(["src", "-gen/"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "  Suggestion: #include \"-gen/.../bar.h\"",
        ));
}
