//! Integration tests for the `rsb` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn rsb() -> Command {
    let mut cmd = Command::cargo_bin("rsb").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RSB_LOG");
    cmd
}

fn json_stdout(args: &[&str]) -> serde_json::Value {
    let output = rsb().args(args).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_table() {
    rsb()
        .args(["simulate", "-n", "500", "--seed", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("500 races")
                .and(predicate::str::contains("H2/3"))
                .and(predicate::str::contains("H11/12"))
                .and(predicate::str::contains("Simulation time")),
        );
}

#[test]
fn simulate_json_counts_every_race() {
    let report = json_stdout(&["simulate", "-n", "800", "--seed", "3", "--json"]);
    assert_eq!(report["races"], 800);
    let horses = report["horses"].as_array().unwrap();
    assert_eq!(horses.len(), 9);
    let wins: u64 = horses.iter().map(|h| h["wins"].as_u64().unwrap()).sum();
    assert_eq!(wins, 800);
    let total: f64 = horses.iter().map(|h| h["probability"].as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn simulate_is_reproducible_and_thread_independent() {
    let parallel = json_stdout(&["simulate", "-n", "3000", "--seed", "9", "--json"]);
    let sequential = json_stdout(&[
        "simulate",
        "-n",
        "3000",
        "--seed",
        "9",
        "--sequential",
        "--json",
    ]);
    assert_eq!(parallel, sequential);
}

// ---------------------------------------------------------------------------
// estimate
// ---------------------------------------------------------------------------

#[test]
fn estimate_from_positions() {
    let report = json_stdout(&[
        "estimate", "-n", "1000", "-p", "7=14", "-p", "4=3", "--seed", "2", "--json",
    ]);
    assert_eq!(report["trials"], 1000);
    let horses = report["horses"].as_array().unwrap();
    assert_eq!(horses.len(), 9);
    let seven = horses.iter().find(|h| h["horse"] == 7).unwrap();
    assert!(seven["probability"].as_f64().unwrap() > 0.8);
    assert!(horses.iter().all(|h| h.get("wins").is_none()));
}

#[test]
fn estimate_finished_race() {
    rsb()
        .args(["estimate", "-p", "10=15", "-n", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Race already won by H10"));
}

#[test]
fn estimate_zero_trials_is_all_zero() {
    let report = json_stdout(&["estimate", "-n", "0", "--json"]);
    let horses = report["horses"].as_array().unwrap();
    assert!(horses.iter().all(|h| h["probability"] == 0.0));
}

#[test]
fn estimate_rejects_negative_trials() {
    rsb()
        .args(["estimate", "-n", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid trial count -5"));
}

#[test]
fn estimate_rejects_unknown_horse() {
    rsb()
        .args(["estimate", "-p", "12=3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roll outcome 12"));
}

#[test]
fn estimate_rejects_malformed_position() {
    rsb()
        .args(["estimate", "-p", "seven"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected HORSE=POSITION"));
}

#[test]
fn estimate_rejects_moving_a_horse_back() {
    rsb()
        .args(["estimate", "-p", "9=15", "-p", "9=3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot move H9 back from 15 to 3"));
}

// ---------------------------------------------------------------------------
// race
// ---------------------------------------------------------------------------

#[test]
fn race_rejects_negative_speed() {
    rsb()
        .args(["race", "--speed=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid speed"));
}

#[test]
fn help_lists_commands() {
    rsb()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("simulate")
                .and(predicate::str::contains("estimate"))
                .and(predicate::str::contains("race")),
        );
}
