//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments. Every run points -C at a scratch config
//! so nothing touches the real user config directory.

use assert_cmd::prelude::*;
use predicates::prelude::*;

mod util;
use util::ptop_command;

fn scratch_config() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().unwrap()
}

#[test]
fn test_small_rate() {
    let config = scratch_config();
    ptop_command()
        .args(["-C", config.path().to_str().unwrap(), "-r", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please set your update rate to be at least 100 milliseconds.",
        ));
}

#[test]
fn test_unparseable_rate() {
    let config = scratch_config();
    ptop_command()
        .args(["-C", config.path().to_str().unwrap(), "-r", "fast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse"));
}

#[test]
fn test_tiny_capacity() {
    let config = scratch_config();
    ptop_command()
        .args(["-C", config.path().to_str().unwrap(), "--capacity", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please set your history capacity to be at least 2 samples.",
        ));
}

#[test]
fn test_non_numeric_capacity() {
    let config = scratch_config();
    ptop_command()
        .args(["-C", config.path().to_str().unwrap(), "--capacity", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_version() {
    ptop_command().arg("-V").assert().success();
}

#[test]
fn test_help() {
    ptop_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("named pipe"));
}
