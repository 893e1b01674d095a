//! Integration tests for the render and save commands

use assert_cmd::Command;
use insta::assert_snapshot;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use treescribe::{render, RenderOptions, TreeRenderer};

fn treescribe(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("treescribe").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

/// Create a mock project under `<tmp>/project`.
fn create_test_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("project");

    fs::create_dir_all(root.join("src/bin")).unwrap();
    fs::create_dir_all(root.join("tests")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();

    File::create(root.join("Cargo.toml"))
        .unwrap()
        .write_all(b"[package]\nname = \"test\"")
        .unwrap();
    File::create(root.join("src/main.rs"))
        .unwrap()
        .write_all(b"fn main() {}")
        .unwrap();
    File::create(root.join("src/lib.rs")).unwrap();
    File::create(root.join("src/bin/tool.rs")).unwrap();
    File::create(root.join("tests/it.rs")).unwrap();
    File::create(root.join(".gitignore")).unwrap();

    (dir, root)
}

#[test]
fn test_render_project_snapshot() {
    let (_dir, root) = create_test_project();

    let output = render(&root).unwrap();

    assert_snapshot!(output, @r"
    project/
    .....gitignore
    ....Cargo.toml
    ....docs/
    ....src/
    ........bin/
    ............tool.rs
    ........lib.rs
    ........main.rs
    ....tests/
    ........it.rs
    ");
}

#[test]
fn test_render_custom_indent_snapshot() {
    let (_dir, root) = create_test_project();

    let output = TreeRenderer::new(RenderOptions::new().with_indent("|   "))
        .render(&root.join("src"))
        .unwrap();

    assert_snapshot!(output, @r"
    src/
    |   bin/
    |   |   tool.rs
    |   lib.rs
    |   main.rs
    ");
}

#[test]
fn test_render_every_line_is_terminated() {
    let (_dir, root) = create_test_project();

    let output = render(&root).unwrap();

    assert!(output.ends_with('\n'));
    assert_eq!(output.matches('\n').count(), 11);
}

#[test]
fn test_cli_render_prints_listing() {
    let home = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .arg("render")
        .arg(root.join("src"))
        .assert()
        .success()
        .stdout("src/\n....bin/\n........tool.rs\n....lib.rs\n....main.rs\n");
}

#[test]
fn test_cli_render_matches_library() {
    let home = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    let expected = render(&root).unwrap();

    treescribe(&home)
        .arg("render")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_cli_render_indent_flag() {
    let home = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .args(["render", "--indent", "  "])
        .arg(root.join("src"))
        .assert()
        .success()
        .stdout("src/\n  bin/\n    tool.rs\n  lib.rs\n  main.rs\n");
}

#[test]
fn test_cli_render_rejects_invalid_indent() {
    let home = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .args(["render", "--indent", ""])
        .arg(&root)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("indent must not be empty"));

    treescribe(&home)
        .args(["save", "--indent", "\n", "--dest"])
        .arg(root.join("docs"))
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line breaks"));

    assert!(!root.join("docs/project_tree.txt").exists());
}

#[test]
fn test_cli_render_rejects_file() {
    let home = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .arg("render")
        .arg(root.join("Cargo.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_cli_render_rejects_missing_path() {
    let home = TempDir::new().unwrap();

    treescribe(&home)
        .args(["render", "/nonexistent/path/12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_cli_save_default_name() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .arg("save")
        .arg("--dest")
        .arg(out.path())
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("project_tree.txt"));

    let saved = fs::read_to_string(out.path().join("project_tree.txt")).unwrap();
    assert_eq!(saved, render(&root).unwrap());
}

#[test]
fn test_cli_save_markdown_is_passthrough() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .args(["save", "--markdown", "--dest"])
        .arg(out.path())
        .arg(&root)
        .assert()
        .success();

    let saved = fs::read_to_string(out.path().join("project_tree.md")).unwrap();
    assert_eq!(saved, render(&root).unwrap());
    assert!(!saved.contains("```"));
}

#[test]
fn test_cli_save_explicit_output() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();
    let target = out.path().join("listing.txt");

    treescribe(&home)
        .args(["save", "--output"])
        .arg(&target)
        .arg(root.join("tests"))
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "tests/\n....it.rs\n");
}

#[test]
fn test_cli_save_unwritable_destination() {
    let home = TempDir::new().unwrap();
    let (_dir, root) = create_test_project();

    treescribe(&home)
        .args(["save", "--dest", "/nonexistent/dir"])
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
