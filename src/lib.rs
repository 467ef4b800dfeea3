// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod render;
pub mod source;
pub mod types;
pub mod watch;

use anyhow::Result;
use tracing::{debug, error};

use crate::cli::CliArgs;
use crate::config::{ensure_acyclic_from, load_and_validate, parse_and_validate, LayoutSection, TaskFile};
use crate::errors::TaskgridError;
use crate::graph::annotate;
use crate::layout::{allocate, normalize_columns};
use crate::render::{render_annotations, render_grid, render_table, Geometry, Scene};
use crate::source::{load_closure, TaskFileSource};
use crate::types::OutputFormat;

pub use crate::graph::{AnnotatedGraph, AnnotatedNode, Node};
pub use crate::layout::{compute_layout, Allocation, Layout};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading
/// - closure loading through the task source
/// - annotation + allocation
/// - rendering to stdout
/// - (optional) re-running on file changes
pub async fn run(args: CliArgs) -> Result<()> {
    let path = args.tasks.clone();
    let contents = std::fs::read_to_string(&path)?;
    let file = parse_and_validate(&contents)?;

    let output = render_task_file(&file, &args)?;
    print!("{output}");

    if args.watch {
        let initial = watch::content_hash(contents.as_bytes());
        watch::watch_task_file(&path, Some(initial), |text| {
            match parse_and_validate(text).and_then(|file| render_task_file(&file, &args)) {
                Ok(output) => print!("{output}"),
                Err(err) => error!(error = %err, "layout failed; keeping previous output"),
            }
        })
        .await?;
    }

    Ok(())
}

/// Settings for one run, merged from the CLI and the `[layout]` section.
///
/// CLI values win over the task file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub root: String,
    /// Already normalized to an odd count.
    pub columns: usize,
    pub geometry: Geometry,
    pub format: OutputFormat,
    pub dry_run: bool,
}

impl RunOptions {
    pub fn resolve(args: &CliArgs, layout: &LayoutSection) -> errors::Result<Self> {
        let root = args
            .root
            .clone()
            .or_else(|| layout.root.clone())
            .ok_or_else(|| {
                TaskgridError::ConfigError(
                    "no root task: set [layout].root or pass --root".to_string(),
                )
            })?;

        if args.columns == Some(0) {
            return Err(TaskgridError::ConfigError(
                "--columns must be >= 1 (got 0)".to_string(),
            ));
        }

        let geometry = Geometry::from_section(layout, args.width);
        let columns = args
            .columns
            .or(layout.columns)
            .map(normalize_columns)
            .unwrap_or_else(|| geometry.derived_columns());

        Ok(Self {
            root,
            columns,
            geometry,
            format: args.format.unwrap_or(layout.format),
            dry_run: args.dry_run,
        })
    }
}

/// Run the whole pipeline for a validated task file and return the text to
/// print.
pub fn render_task_file(file: &TaskFile, args: &CliArgs) -> errors::Result<String> {
    let opts = RunOptions::resolve(args, &file.layout)?;
    render_with_options(file, &opts)
}

pub fn render_with_options(file: &TaskFile, opts: &RunOptions) -> errors::Result<String> {
    ensure_acyclic_from(file, &opts.root)?;

    let mut source = TaskFileSource::new(file);
    let nodes = load_closure(&mut source, &opts.root)?;
    let graph = annotate(&nodes, &opts.root)?;

    if opts.dry_run {
        debug!("dry-run complete (no allocation)");
        return Ok(render_annotations(&graph));
    }

    let layout = allocate(&graph, opts.columns)?;

    match opts.format {
        OutputFormat::Text => Ok(render_table(&graph, &layout)),
        OutputFormat::Grid => Ok(render_grid(&graph, &layout)),
        OutputFormat::Json => {
            let mut json = Scene::build(&graph, &layout, &opts.geometry).to_json()?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Load, validate and render a task file from disk in one go.
pub fn render_path(args: &CliArgs) -> errors::Result<String> {
    let file = load_and_validate(&args.tasks)?;
    render_task_file(&file, args)
}
