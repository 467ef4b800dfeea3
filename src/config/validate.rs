// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use tracing::debug;

use crate::config::model::{RawTaskFile, TaskEntry, TaskFile};
use crate::errors::{Result, TaskgridError};

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = crate::errors::TaskgridError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        validate_task_file(&raw)?;
        Ok(TaskFile::new_unchecked(raw.layout, raw.task))
    }
}

/// Run every structural check on a raw task file.
pub fn validate_task_file(cfg: &RawTaskFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_layout_section(cfg)?;
    validate_task_ids(cfg)?;
    report_dangling_requires(cfg);
    Ok(())
}

fn ensure_has_tasks(cfg: &RawTaskFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(TaskgridError::ConfigError(
            "task file must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_layout_section(cfg: &RawTaskFile) -> Result<()> {
    let layout = &cfg.layout;

    if layout.columns == Some(0) {
        return Err(TaskgridError::ConfigError(
            "[layout].columns must be >= 1 (got 0)".to_string(),
        ));
    }
    if layout.column_width == 0 {
        return Err(TaskgridError::ConfigError(
            "[layout].column_width must be >= 1 (got 0)".to_string(),
        ));
    }
    if layout.row_height == 0 {
        return Err(TaskgridError::ConfigError(
            "[layout].row_height must be >= 1 (got 0)".to_string(),
        ));
    }
    if let Some(root) = &layout.root {
        if root.trim().is_empty() {
            return Err(TaskgridError::ConfigError(
                "[layout].root must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_task_ids(cfg: &RawTaskFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (pos, task) in cfg.task.iter().enumerate() {
        if task.id.trim().is_empty() {
            return Err(TaskgridError::ConfigError(format!(
                "task #{} has an empty id",
                pos + 1
            )));
        }
        if !seen.insert(task.id.as_str()) {
            return Err(TaskgridError::ConfigError(format!(
                "duplicate task id '{}'",
                task.id
            )));
        }
    }
    Ok(())
}

/// Dangling ids are legal (the layout ignores them) but worth a log line.
fn report_dangling_requires(cfg: &RawTaskFile) {
    let ids: HashSet<&str> = cfg.task.iter().map(|t| t.id.as_str()).collect();
    for task in &cfg.task {
        for dep in &task.requires {
            if !ids.contains(dep.as_str()) {
                debug!(task = %task.id, dep = %dep, "task requires unknown id; it will be ignored");
            }
        }
    }
}

/// Structural cycle check over the tasks reachable from `root`.
///
/// Checked per run against the effective root, which `--root` may change.
/// Cycles elsewhere in the file are accepted.
pub fn ensure_acyclic_from(file: &TaskFile, root: &str) -> Result<()> {
    check_reachable_acyclic(&file.task, root)
}

fn check_reachable_acyclic(tasks: &[TaskEntry], root: &str) -> Result<()> {
    // Edge direction: task -> dependency, i.e. along `requires`.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for task in tasks {
        graph.add_node(task.id.as_str());
    }
    for task in tasks {
        for dep in &task.requires {
            if graph.contains_node(dep.as_str()) {
                graph.add_edge(task.id.as_str(), dep.as_str(), ());
            }
        }
    }

    if !graph.contains_node(root) {
        // Reported as a missing root when the layout runs.
        return Ok(());
    }

    let mut reachable: DiGraphMap<&str, ()> = DiGraphMap::new();
    let mut dfs = Dfs::new(&graph, root);
    while let Some(node) = dfs.next(&graph) {
        reachable.add_node(node);
    }
    for (from, to, _) in graph.all_edges() {
        if reachable.contains_node(from) && reachable.contains_node(to) {
            reachable.add_edge(from, to, ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&reachable, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(TaskgridError::CyclicDependency(format!(
                "cycle detected in tasks reachable from '{}' involving task '{}'",
                root, node
            )))
        }
    }
}
