//! End-to-end CLI runs over small temp-file fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_fixtures(dir: &Path, with_seats: bool) -> (std::path::PathBuf, std::path::PathBuf) {
    let seats0 = if with_seats { r#", "seats": 21"# } else { "" };
    let seats1 = if with_seats { r#", "seats": 10"# } else { "" };
    let regions = format!(
        r#"[
            {{"region_id": 0, "type": "ordinary", "size": 1200000{seats0}}},
            {{"region_id": 1, "type": "ordinary", "size": 800000{seats1}}}
        ]"#
    );
    let votes = r#"[
        {"party": "party_a", "region": 0, "votes": 391000},
        {"party": "party_b", "region": 0, "votes": 311000},
        {"party": "party_c", "region": 0, "votes": 184000},
        {"party": "party_a", "region": 1, "votes": 200000},
        {"party": "party_b", "region": 1, "votes": 260000},
        {"party": "party_c", "region": 1, "votes": 80000}
    ]"#;
    let rp = dir.join("regions.json");
    let vp = dir.join("votes.json");
    fs::write(&rp, regions).unwrap();
    fs::write(&vp, votes).unwrap();
    (vp, rp)
}

fn apportion() -> Command {
    Command::cargo_bin("apportion").unwrap()
}

#[test]
fn runs_with_explicit_seats() {
    let dir = tempfile::tempdir().unwrap();
    let (votes, regions) = write_fixtures(dir.path(), true);
    apportion()
        .args(["--votes", votes.to_str().unwrap()])
        .args(["--regions", regions.to_str().unwrap()])
        .args(["--method", "hare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("party_a"));
}

#[test]
fn pre_distributes_when_total_seats_given() {
    let dir = tempfile::tempdir().unwrap();
    let (votes, regions) = write_fixtures(dir.path(), false);
    let out = dir.path().join("national.json");
    let regions_out = dir.path().join("region_seats.json");
    apportion()
        .args(["--votes", votes.to_str().unwrap()])
        .args(["--regions", regions.to_str().unwrap()])
        .args(["--method", "dhondt"])
        .args(["--total-seats", "31"])
        .args(["--min-seats", "2"])
        .args(["--region-method", "loreg"])
        .args(["--out", out.to_str().unwrap()])
        .args(["--regions-out", regions_out.to_str().unwrap()])
        .assert()
        .success();
    let raw = fs::read_to_string(&regions_out).unwrap();
    let seats: serde_json::Value = serde_json::from_str(&raw).unwrap();
    // 31 seats split across the two regions.
    let total: u64 = seats
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["seats"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 31);
    assert!(out.exists());
}

#[test]
fn unknown_method_exits_with_validation_code() {
    let dir = tempfile::tempdir().unwrap();
    let (votes, regions) = write_fixtures(dir.path(), true);
    apportion()
        .args(["--votes", votes.to_str().unwrap()])
        .args(["--regions", regions.to_str().unwrap()])
        .args(["--method", "fake_method"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown method"));
}

#[test]
fn missing_input_exits_with_io_code() {
    let dir = tempfile::tempdir().unwrap();
    let (_, regions) = write_fixtures(dir.path(), true);
    apportion()
        .args(["--votes", "/nonexistent/votes.json"])
        .args(["--regions", regions.to_str().unwrap()])
        .args(["--method", "hare"])
        .assert()
        .code(4);
}

#[test]
fn impossible_barrier_exits_with_compute_code() {
    let dir = tempfile::tempdir().unwrap();
    let (votes, regions) = write_fixtures(dir.path(), true);
    apportion()
        .args(["--votes", votes.to_str().unwrap()])
        .args(["--regions", regions.to_str().unwrap()])
        .args(["--method", "hare"])
        .args(["--barrier", "0.8"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("barrier"));
}

#[test]
fn score_flag_prints_score() {
    let dir = tempfile::tempdir().unwrap();
    let (votes, regions) = write_fixtures(dir.path(), true);
    apportion()
        .args(["--votes", votes.to_str().unwrap()])
        .args(["--regions", regions.to_str().unwrap()])
        .args(["--method", "sainte_lague"])
        .arg("--score")
        .assert()
        .success()
        .stdout(predicate::str::contains("proportionality score"));
}
