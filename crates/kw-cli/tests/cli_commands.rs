//! Integration tests for the `kw` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a small valid scene: a ball and a box in separate stacks.
fn scene_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("scene.json");
    fs::write(
        &path,
        r#"{
    "stacks": [["ball1"], ["box1"]],
    "objects": {
        "ball1": {"form": "ball", "size": "small", "color": "white"},
        "box1": {"form": "box", "size": "large", "color": "red"}
    }
}"#,
    )
    .unwrap();
    path
}

fn kw() -> Command {
    Command::cargo_bin("kw").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_scene() {
    let dir = TempDir::new().unwrap();
    let scene = scene_file(&dir);
    kw().args(["check", "-w", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Scene is valid")
                .and(predicate::str::contains("2 objects in 2 stacks")),
        );
}

#[test]
fn check_rejects_duplicate_placement() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{
    "stacks": [["ball1"], ["ball1"]],
    "objects": {"ball1": {"form": "ball", "size": "small", "color": "white"}}
}"#,
    )
    .unwrap();

    kw().args(["check", "-w", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("placed twice"));
}

#[test]
fn check_fails_on_missing_file() {
    kw().args(["check", "-w", "no-such-scene.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_objects_with_positions() {
    let dir = TempDir::new().unwrap();
    let scene = scene_file(&dir);
    kw().args(["list", "-w", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ball1")
                .and(predicate::str::contains("stack 0, height 0"))
                .and(predicate::str::contains("2 objects")),
        );
}

#[test]
fn list_filters_by_form() {
    let dir = TempDir::new().unwrap();
    let scene = scene_file(&dir);
    kw().args(["list", "-w", scene.to_str().unwrap(), "--form", "box"])
        .assert()
        .success()
        .stdout(predicate::str::contains("box1").and(predicate::str::contains("ball1").not()));
}

// ---------------------------------------------------------------------------
// interpret
// ---------------------------------------------------------------------------

#[test]
fn interpret_renders_the_goal() {
    let dir = TempDir::new().unwrap();
    let scene = scene_file(&dir);
    let parses = dir.path().join("parses.json");
    fs::write(
        &parses,
        r#"[{
    "source": "put a ball in the box",
    "command": {
        "target": {"quantifier": "any", "object": {"form": "ball"}},
        "location": {
            "relation": "inside",
            "entity": {"quantifier": "the", "object": {"form": "box"}}
        }
    }
}]"#,
    )
    .unwrap();

    kw().args([
        "interpret",
        parses.to_str().unwrap(),
        "-w",
        scene.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("put a ball in the box")
            .and(predicate::str::contains("inside(ball1,box1)"))
            .and(predicate::str::contains("1 of 1 parses")),
    );
}

#[test]
fn interpret_fails_when_nothing_is_satisfiable() {
    let dir = TempDir::new().unwrap();
    let scene = scene_file(&dir);
    let parses = dir.path().join("parses.json");
    fs::write(
        &parses,
        r#"[{
    "source": "take a pyramid",
    "command": {"target": {"quantifier": "any", "object": {"form": "pyramid"}}}
}]"#,
    )
    .unwrap();

    kw().args([
        "interpret",
        parses.to_str().unwrap(),
        "-w",
        scene.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("found no interpretation"));
}

#[test]
fn interpret_surfaces_referential_ambiguity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.json");
    fs::write(
        &path,
        r#"{
    "stacks": [["ball1"], ["ball2"]],
    "objects": {
        "ball1": {"form": "ball", "size": "small", "color": "white"},
        "ball2": {"form": "ball", "size": "large", "color": "black"}
    }
}"#,
    )
    .unwrap();
    let parses = dir.path().join("parses.json");
    fs::write(
        &parses,
        r#"[{
    "source": "take the ball",
    "command": {"target": {"quantifier": "the", "object": {"form": "ball"}}}
}]"#,
    )
    .unwrap();

    kw().args([
        "interpret",
        parses.to_str().unwrap(),
        "-w",
        path.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("ambiguous reference"));
}
