#![cfg(feature = "cli")]
use assert_cmd::Command;
use predicates::prelude::*;

fn countdown() -> Command {
    Command::cargo_bin("countdown").unwrap()
}

#[test]
fn default_method_prints_count() {
    countdown()
        .arg("50")
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum steps: 6"))
        .stdout(predicate::str::contains("operations").not());
}

#[test]
fn path_is_printed_and_validated() {
    countdown()
        .args(["10", "--method", "dp", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum steps: 3"))
        .stdout(predicate::str::contains("operations: -1 /3 /3"))
        .stdout(predicate::str::contains("sequence validated"));
}

#[test]
fn count_only_methods_still_show_a_path() {
    countdown()
        .args(["100", "--method", "memoized", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum steps: 7"))
        .stdout(predicate::str::contains("operations: -1 /3 /3 -1 -1 /3 /3"));
}

#[test]
fn bfs_matches_dp_on_780() {
    countdown()
        .args(["780", "--method", "bfs", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum steps: 10"));
}

#[test]
fn negative_input_is_rejected() {
    countdown()
        .arg("-5")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("positive integer"));
    countdown().arg("0").assert().code(1);
}

#[test]
fn non_integer_input_is_rejected() {
    countdown().arg("ten").assert().code(1);
}

#[test]
fn unknown_method_is_rejected() {
    countdown()
        .args(["10", "--method", "dfs"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn oversized_table_exits_cleanly() {
    countdown()
        .arg(i64::MAX.to_string())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large to tabulate"));
}

#[test]
fn recursive_refuses_large_n() {
    countdown()
        .args(["21", "--method", "rec"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("warning"))
        .stdout(predicate::str::is_empty());
    countdown()
        .args(["20", "--method", "recursive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minimum steps: 4"));
}

#[test]
fn memoized_depth_limit_suggests_iterative_method() {
    countdown()
        .args(["100000", "--method", "memo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("iterative strategy"));
}

#[test]
fn check_validates_external_sequences() {
    countdown()
        .args(["10", "--check", "-1 /3 /3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence valid"));
    countdown()
        .args(["7", "--check", "/2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be applied to 7"));
    countdown()
        .args(["7", "--check", "*2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown operation"));
}
