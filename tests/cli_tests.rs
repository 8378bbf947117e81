// CLI behaviour: the tree goes to stdout, rendered errors go to stderr.

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn tdop() -> Command {
    Command::cargo_bin("tdop").unwrap()
}

#[test]
fn cli_prints_tree() {
    tdop()
        .arg("tests/fixtures/factorial.js")
        .assert()
        .success()
        .stdout(contains("function function fact").and(contains("statement return")));
}

#[test]
fn cli_prints_empty_program() {
    tdop()
        .arg("tests/fixtures/empty.js")
        .assert()
        .success()
        .stdout("<empty program>\n");
}

#[test]
fn cli_prints_tokens() {
    tdop()
        .arg("tests/fixtures/objects.js")
        .arg("--tokens")
        .assert()
        .success()
        .stdout(contains("name").and(contains("\"origin\\n\"")).and(contains("(end)")));
}

#[test]
fn cli_reports_errors_with_source_line() {
    tdop()
        .arg("tests/fixtures/redeclared.js")
        .assert()
        .failure()
        .code(1)
        .stderr(
            contains("Error: AlreadyDefined")
                .and(contains("redeclared.js:3:5"))
                .and(contains("3 | var total = 2;")),
        );
}

#[test]
fn cli_reports_missing_file() {
    tdop()
        .arg("tests/fixtures/does_not_exist.js")
        .assert()
        .failure()
        .code(1);
}
