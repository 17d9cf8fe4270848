// tests/integration/output_formats.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{CatalogFixture, result_ids};

fn command(fixture: &CatalogFixture) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_facet_filter"));
    cmd.current_dir(fixture.root()).env_remove("RUST_LOG").arg("--catalog").arg(fixture.catalog());
    cmd
}

#[test]
fn table_output_lists_matches_and_sections() {
    let fixture = CatalogFixture::new();
    command(&fixture)
        .args(["--tag", "neon", "--type", "video", "--chips", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("asset-1"))
        .stdout(predicate::str::contains("Night street"))
        .stdout(predicate::str::contains("1 of 6 assets"))
        .stdout(predicate::str::contains("  Video"))
        .stdout(predicate::str::contains("  #neon"))
        .stdout(predicate::str::contains("Average score: 92"))
        .stdout(predicate::str::contains("asset-2").not());
}

#[test]
fn json_output_has_counts_and_chips() {
    let fixture = CatalogFixture::new();
    let output = command(&fixture)
        .args(["--format", "json", "--exclude-tag", "urban", "--entity", "NASA", "--chips"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["total"], 6);
    assert_eq!(value["matched"], 2);
    assert_eq!(result_ids(&value), vec!["asset-2", "asset-3"]);
    assert_eq!(value["filters"]["active"], true);
    assert_eq!(value["filters"]["chips"][0]["label"], "NOT #urban");
    assert_eq!(value["filters"]["chips"][0]["target"]["kind"], "excluded_tag");
    assert_eq!(value["filters"]["chips"][1]["label"], "@NASA");
}

#[test]
fn jsonl_output_is_line_per_asset() {
    let fixture = CatalogFixture::new();
    let output = command(&fixture)
        .args(["--format", "jsonl", "--min-score", "85", "--stats", "--top-entities", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["id"], "asset-1");
    assert_eq!(lines[2]["id"], "asset-6");
    assert_eq!(lines[3]["stats"]["total"], 3);
    assert_eq!(lines[3]["stats"]["topEntities"][0]["entity"], "NASA");
    assert_eq!(lines[3]["stats"]["averageScore"], 92);
    assert!(lines[3]["stats"].get("top_entities").is_none());
}

#[test]
fn vocabulary_lists_catalog_values() {
    let fixture = CatalogFixture::new();
    command(&fixture)
        .args(["--vocabulary", "--query", "nothing-matches-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 6 assets"))
        .stdout(predicate::str::contains("Sources: Instagram, Reddit, Spotify, Unsplash, YouTube"));
}

#[test]
fn facet_search_narrows_vocabulary() {
    let fixture = CatalogFixture::new();
    command(&fixture)
        .args(["--vocabulary", "--facet-search", "na"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: nature\n"))
        .stdout(predicate::str::contains("Entities: NASA\n"))
        .stdout(predicate::str::contains("Sources: Instagram, Reddit, Spotify, Unsplash, YouTube"));
}

#[test]
fn facet_search_requires_vocabulary() {
    let fixture = CatalogFixture::new();
    command(&fixture).args(["--facet-search", "na"]).assert().failure();
}

#[test]
fn yaml_catalog_is_accepted() {
    let fixture = CatalogFixture::new();
    let yaml = fixture.write(
        "catalog.yaml",
        "- id: asset-y\n  title: Podcast\n  type: Audio\n  tags: [talk]\n  source: Spotify\n  score: 70\n  year: 2023\n",
    );
    Command::new(env!("CARGO_BIN_EXE_facet_filter"))
        .arg("--catalog")
        .arg(&yaml)
        .args(["--type", "audio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("asset-y"))
        .stdout(predicate::str::contains("1 of 1 assets"));
}
