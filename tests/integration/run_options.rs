// tests/integration/run_options.rs

use clap::Parser;
use taskgrid::cli::CliArgs;
use taskgrid::config::{default_config_path, parse_and_validate, TaskFile};
use taskgrid::{render_task_file, RunOptions};
use taskgrid::errors::TaskgridError;
use taskgrid::types::OutputFormat;

use crate::common::builders::{node, TaskFileBuilder};

fn args(extra: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("taskgrid").chain(extra.iter().copied()))
}

fn single_task_file() -> TaskFile {
    TaskFileBuilder::new().with_node(node("R", &[], false)).root("R").build()
}

#[test]
fn defaults_derive_thirteen_columns() {
    let opts = RunOptions::resolve(&args(&[]), &single_task_file().layout).unwrap();

    assert_eq!(opts.root, "R");
    assert_eq!(opts.columns, 13);
    assert_eq!(opts.geometry.width, 2500);
    assert_eq!(opts.format, OutputFormat::Text);
    assert!(!opts.dry_run);
}

#[test]
fn cli_overrides_task_file() {
    let file = TaskFileBuilder::new()
        .with_node(node("R", &[], false))
        .with_node(node("S", &[], false))
        .root("R")
        .columns(9)
        .format(OutputFormat::Grid)
        .build();

    let opts = RunOptions::resolve(
        &args(&["--root", "S", "--columns", "4", "--format", "json", "--dry-run"]),
        &file.layout,
    )
    .unwrap();

    assert_eq!(opts.root, "S");
    assert_eq!(opts.columns, 5);
    assert_eq!(opts.format, OutputFormat::Json);
    assert!(opts.dry_run);
}

#[test]
fn task_file_columns_used_without_cli_value() {
    let file = TaskFileBuilder::new()
        .with_node(node("R", &[], false))
        .root("R")
        .columns(6)
        .build();

    let opts = RunOptions::resolve(&args(&[]), &file.layout).unwrap();
    assert_eq!(opts.columns, 7);
}

#[test]
fn width_below_minimum_is_clamped() {
    let opts = RunOptions::resolve(&args(&["--width", "1000"]), &single_task_file().layout).unwrap();
    assert_eq!(opts.geometry.width, 2500);
    assert_eq!(opts.columns, 13);
}

#[test]
fn wide_display_gets_more_columns() {
    // 3600 / 180 = 20 columns fit, minus one is 19
    let opts = RunOptions::resolve(&args(&["--width", "3600"]), &single_task_file().layout).unwrap();
    assert_eq!(opts.columns, 19);
}

#[test]
fn lowered_minimum_width_allows_narrow_grid() {
    let mut raw = TaskFileBuilder::new()
        .with_node(node("R", &[], false))
        .root("R")
        .build_raw();
    raw.layout.min_width = 500;
    let file = TaskFile::try_from(raw).unwrap();

    // 1000 / 180 = 5, minus one is 4, bumped to 5
    let opts = RunOptions::resolve(&args(&["--width", "1000"]), &file.layout).unwrap();
    assert_eq!(opts.geometry.width, 1000);
    assert_eq!(opts.columns, 5);
}

#[test]
fn missing_root_setting_is_config_error() {
    let file = TaskFileBuilder::new().with_node(node("R", &[], false)).build();

    match RunOptions::resolve(&args(&[]), &file.layout) {
        Err(TaskgridError::ConfigError(msg)) => assert!(msg.contains("no root task")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn zero_columns_on_cli_is_config_error() {
    let result = RunOptions::resolve(&args(&["--columns", "0"]), &single_task_file().layout);
    assert!(matches!(result, Err(TaskgridError::ConfigError(_))));
}

#[test]
fn tasks_path_defaults_to_roadmap_file() {
    assert_eq!(args(&[]).tasks, default_config_path());
    assert_eq!(args(&["--tasks", "plans/q3.toml"]).tasks.to_str(), Some("plans/q3.toml"));
}

#[test]
fn cycle_under_file_root_does_not_block_other_root() {
    let text = r#"
[layout]
root = "A"

[[task]]
id = "A"
requires = ["B"]

[[task]]
id = "B"
requires = ["A"]

[[task]]
id = "C"
closed = true
"#;

    let file = parse_and_validate(text).unwrap();
    let out = render_task_file(&file, &args(&["--root", "C", "--columns", "5"])).unwrap();
    assert_eq!(out.lines().last(), Some("1 tasks, 5 columns, 1 rows"));

    match render_task_file(&file, &args(&["--columns", "5"])) {
        Err(TaskgridError::CyclicDependency(msg)) => assert!(msg.contains("reachable from 'A'")),
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}
