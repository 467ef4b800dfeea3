// tests/integration/render_pipeline.rs

use std::io::Write;

use clap::Parser;
use serde_json::Value;
use tempfile::NamedTempFile;
use taskgrid::cli::CliArgs;
use taskgrid::config::TaskFile;
use taskgrid::errors::TaskgridError;
use taskgrid::{render_path, render_task_file};

use crate::common::builders::{node, NodeBuilder, TaskFileBuilder};
use crate::common::init_tracing;

fn args(extra: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("taskgrid").chain(extra.iter().copied()))
}

/// Root with two closed leaves.
fn two_leaf_file() -> TaskFile {
    TaskFileBuilder::new()
        .with_node(NodeBuilder::new("R").title("Launch").requires_all(&["L1", "L2"]).build())
        .with_node(NodeBuilder::new("L1").closed(true).owner("user-1").build())
        .with_node(NodeBuilder::new("L2").closed(true).build())
        .root("R")
        .build()
}

#[test]
fn text_table_lists_allocations() {
    init_tracing();

    let out = render_task_file(&two_leaf_file(), &args(&["--columns", "5"])).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("id"));
    assert!(lines[1].starts_with("R "));
    assert!(lines[1].ends_with("Launch"));
    assert!(lines[2].starts_with("L1"));
    assert!(lines[3].starts_with("L2"));
    assert_eq!(lines.last().copied(), Some("3 tasks, 5 columns, 2 rows"));
}

#[test]
fn grid_marks_root_and_numbers_tasks() {
    init_tracing();

    let out = render_task_file(&two_leaf_file(), &args(&["--columns", "5", "--format", "grid"])).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].contains("[*]"));
    assert!(lines[1].contains("[1]"));
    assert!(lines[1].contains("[2]"));
    assert!(lines[1].find("[1]") < lines[1].find("[2]"));
    assert!(out.contains("L1  Task L1"));
}

#[test]
fn json_scene_has_pixels_and_links() {
    init_tracing();

    let out = render_task_file(&two_leaf_file(), &args(&["--columns", "5", "--format", "json"])).unwrap();
    let scene: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(scene["root"], "R");
    assert_eq!(scene["columns"], 5);
    assert_eq!(scene["rows"], 2);
    assert_eq!(scene["canvas"]["width"], 2500);
    // one row of 150px below row 0 at 170px, plus 65px padding
    assert_eq!(scene["canvas"]["height"], 385);

    let nodes = scene["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["id"], "R");
    assert_eq!(nodes[0]["is_root"], true);
    assert_eq!(nodes[0]["center"]["x"].as_f64(), Some(1250.0));
    assert_eq!(nodes[0]["center"]["y"].as_f64(), Some(170.0));
    assert_eq!(nodes[2]["id"], "L2");
    assert_eq!(nodes[2]["x"], 3);
    assert_eq!(nodes[2]["center"]["x"].as_f64(), Some(1430.0));
    assert_eq!(nodes[1]["owner"], "user-1");

    let links = scene["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["from"], "R");
    assert_eq!(links[0]["to"], "L1");
    assert_eq!(links[0]["style"], "active");
    // paths start at the lower box
    assert_eq!(links[0]["path"][0]["y"].as_f64(), Some(320.0));
}

#[test]
fn inactive_dependency_with_owner_gets_assigned_link() {
    init_tracing();

    // R is active through C; B is open and owned, so R -> B is "assigned".
    let file = TaskFileBuilder::new()
        .with_node(node("R", &["B", "C"], false))
        .with_node(NodeBuilder::new("B").owner("user-2").build())
        .with_node(node("C", &[], true))
        .root("R")
        .build();

    let out = render_task_file(&file, &args(&["--columns", "5", "--format", "json"])).unwrap();
    let scene: Value = serde_json::from_str(&out).unwrap();

    let styles: Vec<(&str, &str)> = scene["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| (l["to"].as_str().unwrap(), l["style"].as_str().unwrap()))
        .collect();
    assert_eq!(styles, vec![("B", "assigned"), ("C", "active")]);
}

#[test]
fn dry_run_prints_annotations_only() {
    init_tracing();

    let file = TaskFileBuilder::new()
        .with_node(node("R", &["A"], false))
        .with_node(node("A", &[], true))
        .with_node(node("Other", &[], false))
        .root("R")
        .build();

    let out = render_task_file(&file, &args(&["--dry-run"])).unwrap();

    assert!(out.starts_with("taskgrid dry-run"));
    assert!(out.contains("  root = R"));
    assert!(out.contains("depth: 1  children: 1  active: true"));
    // only the root's closure is loaded from the file
    assert!(out.contains("tasks = 2 (2 reachable)"));
    assert!(!out.contains("Other"));
    assert!(out.contains("required_by: [\"R\"]"));
}

#[test]
fn unknown_root_is_missing_root() {
    init_tracing();

    let file = TaskFileBuilder::new().with_node(node("A", &[], false)).build();

    match render_task_file(&file, &args(&["--root", "R"])) {
        Err(TaskgridError::MissingRoot(id)) => assert_eq!(id, "R"),
        other => panic!("expected MissingRoot, got {other:?}"),
    }
}

#[test]
fn render_path_reads_task_file_from_disk() {
    init_tracing();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[layout]
root = "R"
columns = 3
format = "json"

[[task]]
id = "R"
title = "Ship it"
requires = ["A"]

[[task]]
id = "A"
title = "Build it"
closed = true
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let out = render_path(&args(&["--tasks", path])).unwrap();
    let scene: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(scene["columns"], 3);
    assert_eq!(scene["nodes"][0]["x"], 1);
    assert_eq!(scene["nodes"][1]["id"], "A");
    assert_eq!(scene["nodes"][1]["y"], 1);
    assert_eq!(scene["nodes"][1]["title"], "Build it");
}
