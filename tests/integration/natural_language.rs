// tests/integration/natural_language.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{CatalogFixture, result_ids};

fn command(fixture: &CatalogFixture) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_facet_filter"));
    cmd.current_dir(fixture.root())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG")
        .arg("--catalog")
        .arg(fixture.catalog())
        .args(["--format", "json"]);
    cmd
}

fn report(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

#[test]
fn recorded_response_is_merged() {
    let fixture = CatalogFixture::new();
    let recorded = fixture.write(
        "parsed.json",
        r#"{"mediaTypes":["Video","Hologram"],"entities":["NASA"],"minYear":2022}"#,
    );
    let value = report(command(&fixture).arg("--parsed").arg(&recorded).arg("--chips"));
    assert_eq!(result_ids(&value), vec!["asset-3"]);

    let labels: Vec<&str> = value["filters"]["chips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Video", "@NASA"]);
}

#[test]
fn merge_keeps_existing_selection_and_lifts_exclusion() {
    let fixture = CatalogFixture::new();
    let recorded = fixture.write("parsed.json", r#"{"tags":["urban"],"sources":["Instagram"]}"#);
    let value = report(
        command(&fixture)
            .args(["--exclude-tag", "urban", "--source", "Reddit"])
            .arg("--parsed")
            .arg(&recorded),
    );
    // sources are replaced wholesale, the excluded tag becomes required
    assert_eq!(result_ids(&value), vec!["asset-6"]);
}

#[test]
fn malformed_recording_leaves_filters_unchanged() {
    let fixture = CatalogFixture::new();
    let recorded = fixture.write("parsed.json", "Sorry, I cannot help with that.");
    let value = report(command(&fixture).args(["--tag", "urban"]).arg("--parsed").arg(&recorded));
    assert_eq!(result_ids(&value), vec!["asset-1", "asset-6"]);
}

#[test]
fn ask_without_api_key_is_disabled_but_not_fatal() {
    let fixture = CatalogFixture::new();
    let assert = command(&fixture).args(["--ask", "recent neon videos"]).assert().success();
    assert.stderr(predicate::str::contains("disabled"));
}

#[test]
fn unreachable_parser_leaves_filters_unchanged() {
    let fixture = CatalogFixture::new();
    let value = report(
        command(&fixture)
            .env("GEMINI_API_KEY", "test-key")
            .env("GEMINI_BASE_URL", "http://127.0.0.1:9")
            .env("GEMINI_TIMEOUT_SECS", "2")
            .args(["--type", "audio", "--ask", "neon videos"]),
    );
    assert_eq!(result_ids(&value), vec!["asset-4"]);
}
