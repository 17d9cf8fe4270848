use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_facet_filter"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("facet_filter"))
        .stdout(predicate::str::contains("--exclude-tag"));
}

#[test]
fn shows_version() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_catalog_exits_with_one() {
    bin()
        .args(["--catalog", "/definitely/not/here.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn unknown_media_type_is_rejected() {
    bin()
        .args(["--catalog", "c.json", "--type", "hologram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown media type"));
}

#[test]
fn inverted_score_bounds_exit_with_one() {
    bin()
        .args(["--catalog", "c.json", "--min-score", "90", "--max-score", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--min-score"));
}
