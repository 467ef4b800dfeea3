// src/layout/recenter.rs

//! Horizontal re-centering of an anchor after one of its dependencies has
//! been placed below it.

use std::iter;

use tracing::debug;

use crate::graph::AnnotatedGraph;
use crate::layout::grid_index::GridIndex;
use crate::types::GridPos;

/// Link weight towards a dependent (a node in `required_by`).
pub const DEPENDENT_WEIGHT: f64 = 0.3;
/// Link weight towards a dependency (a node in `requires`).
pub const DEPENDENCY_WEIGHT: f64 = 1.0;

/// Move `anchor` within its row to the column minimising the weighted
/// horizontal distance to its placed neighbours.
///
/// Candidates are the free columns of the row in ascending order, then the
/// anchor's current column; the first strictly lowest score wins. Returns
/// `(old_x, new_x)` when the anchor actually moved.
pub fn recenter_anchor(
    graph: &AnnotatedGraph,
    grid: &mut GridIndex,
    anchor: usize,
    columns: i32,
) -> Option<(i32, i32)> {
    let current = grid.pos_of(anchor)?;
    let neighbours = placed_neighbours(graph, grid, anchor);

    let candidates = (0..columns)
        .filter(|&x| grid.is_free(GridPos::new(x, current.y)))
        .chain(iter::once(current.x));

    let mut best: Option<(i32, f64)> = None;
    for x in candidates {
        let score = link_cost(&neighbours, x);
        if best.is_none_or(|(_, s)| score < s) {
            best = Some((x, score));
        }
    }

    let (new_x, score) = best?;
    if new_x == current.x {
        return None;
    }

    grid.move_column(anchor, new_x);
    debug!(
        task = %graph.node(anchor).id(),
        from = current.x,
        to = new_x,
        row = current.y,
        score,
        "re-centered anchor"
    );
    Some((current.x, new_x))
}

/// `(x, weight)` per placed neighbour entry: dependents first, then
/// dependencies, repeated entries counted each time.
fn placed_neighbours(graph: &AnnotatedGraph, grid: &GridIndex, anchor: usize) -> Vec<(i32, f64)> {
    let node = graph.node(anchor);
    node.required_by
        .iter()
        .map(|id| (id, DEPENDENT_WEIGHT))
        .chain(node.node.requires.iter().map(|id| (id, DEPENDENCY_WEIGHT)))
        .filter_map(|(id, weight)| {
            let pos = grid.pos_of(graph.index_of(id)?)?;
            Some((pos.x, weight))
        })
        .collect()
}

fn link_cost(neighbours: &[(i32, f64)], x: i32) -> f64 {
    neighbours
        .iter()
        .fold(0.0, |acc, &(nx, weight)| acc + f64::from((nx - x).abs()) * weight)
}
