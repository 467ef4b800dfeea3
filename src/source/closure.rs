// src/source/closure.rs

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::errors::{Result, TaskgridError};
use crate::graph::Node;
use crate::source::TaskSource;
use crate::types::TaskId;

/// Fetch `root` and everything it transitively requires.
///
/// Works in rounds: the first round asks for the root alone, each later
/// round asks for every referenced id that is neither loaded nor known to be
/// missing from the source. Records are appended in arrival order; a record
/// whose id is already loaded is dropped.
pub fn load_closure<S: TaskSource + ?Sized>(source: &mut S, root: &str) -> Result<Vec<Node>> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut loaded: HashSet<TaskId> = HashSet::new();
    let mut missing: HashSet<TaskId> = HashSet::new();
    let mut batch: Vec<TaskId> = vec![root.to_string()];
    let mut round = 0usize;

    while !batch.is_empty() {
        round += 1;
        debug!(round, requested = ?batch, "fetching tasks from source");

        for node in source.fetch(&batch)? {
            if loaded.insert(node.id.clone()) {
                nodes.push(node);
            }
        }

        for id in batch.drain(..) {
            if !loaded.contains(&id) {
                debug!(task = %id, "task source has no record for id");
                missing.insert(id);
            }
        }

        batch = unresolved_references(&nodes, &loaded, &missing);
    }

    if !loaded.contains(root) {
        warn!(root = %root, "task source has no record for the root task");
        return Err(TaskgridError::MissingRoot(root.to_string()));
    }

    debug!(root = %root, rounds = round, tasks = nodes.len(), "dependency closure loaded");
    Ok(nodes)
}

/// Referenced ids still to request, in reference order, without repeats.
fn unresolved_references(nodes: &[Node], loaded: &HashSet<TaskId>, missing: &HashSet<TaskId>) -> Vec<TaskId> {
    let mut queued: HashSet<&str> = HashSet::new();
    nodes
        .iter()
        .flat_map(|n| n.requires.iter())
        .filter(|id| !loaded.contains(*id) && !missing.contains(*id))
        .filter(|id| queued.insert(id.as_str()))
        .cloned()
        .collect()
}
