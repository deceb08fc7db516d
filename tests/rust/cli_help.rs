use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_help() {
    let mut cmd = Command::cargo_bin("faust2hpp").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("faust2hpp"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("sources"));
}
