// src/layout/engine.rs

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::errors::{Result, TaskgridError};
use crate::graph::AnnotatedGraph;
use crate::layout::grid_index::GridIndex;
use crate::layout::queue::PlacementQueue;
use crate::layout::recenter::recenter_anchor;
use crate::layout::ring::find_free_cell;
use crate::layout::{normalize_columns, Layout};
use crate::types::GridPos;

/// Assign a grid cell to every node reachable from the graph's root.
///
/// The root goes to the centre of row 0. Every other node is placed below
/// an already placed dependent (its anchor), after which the anchor is
/// pulled towards its neighbours and the node's own dependencies are moved
/// to the head of the queue.
///
/// `columns` is bumped to the next odd number if even.
///
/// Fails with [`TaskgridError::UnresolvableAnchor`] if a node reaches the
/// head of the queue before any of its dependents is placed.
pub fn allocate(graph: &AnnotatedGraph, columns: usize) -> Result<Layout> {
    let columns = normalize_columns(columns);
    let cols = i32::try_from(columns).map_err(|_| {
        TaskgridError::ConfigError(format!("column count {columns} is too large"))
    })?;

    let root = graph.root_index();
    let mut grid = GridIndex::new();
    grid.place(root, GridPos::new(cols / 2, 0));

    let mut queue = PlacementQueue::from_graph(graph);
    debug!(
        root = %graph.root_id(),
        columns,
        queued = queue.len(),
        "starting grid allocation"
    );

    while let Some(idx) = queue.pop_front() {
        let node = graph.node(idx);

        let anchors = grid.placed_dependents(graph, idx);
        let Some(hit) = find_free_cell(&grid, &anchors, cols) else {
            warn!(
                task = %node.id(),
                required_by = ?node.required_by,
                "no placed dependent to anchor task"
            );
            return Err(TaskgridError::UnresolvableAnchor(node.id().to_string()));
        };

        grid.place(idx, hit.pos);
        debug!(
            task = %node.id(),
            x = hit.pos.x,
            y = hit.pos.y,
            anchor = %graph.node(hit.anchor).id(),
            "placed task"
        );

        if hit.anchor != root {
            recenter_anchor(graph, &mut grid, hit.anchor, cols);
        }

        let deps: HashSet<usize> = graph.resolved_requires(idx).iter().copied().collect();
        queue.prioritize(&deps);
    }

    let layout = Layout::from_grid(graph, &grid, columns);
    info!(
        root = %layout.root_id(),
        tasks = layout.len(),
        columns,
        rows = layout.rows(),
        "layout complete"
    );
    Ok(layout)
}
