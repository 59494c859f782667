// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_with_default_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("default.png");
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["--size", "32x32", "--output", out.to_str().unwrap()])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn renders_with_explicit_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("framed.png");
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["--size", "32x32", "--iterations", "64"])
        .args(&["--palette", "gray", "--output", out.to_str().unwrap()])
        .args(&["-2.0", "0.47", "-1.12", "1.12"])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn partial_coordinates_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("partial.png");
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["--size", "16x16", "--output", out.to_str().unwrap()])
        .args(&["-1.0", "1.0"])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn non_numeric_coordinates_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["--output", out.to_str().unwrap()])
        .args(&["left", "right", "bottom", "top"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("floating point"));
    assert!(!out.exists());
}

#[test]
fn inverted_bounds_are_fatal() {
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["0.47", "-2.0", "-1.12", "1.12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad view bounds"));
}

#[test]
fn malformed_size_is_fatal() {
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["--size", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image size"));
}

#[test]
fn zero_iterations_are_rejected() {
    Command::cargo_bin("mandelview")
        .unwrap()
        .args(&["--iterations", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and"));
}
