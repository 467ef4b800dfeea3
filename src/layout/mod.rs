// src/layout/mod.rs

//! Grid allocation engine.
//!
//! - [`engine`] runs the placement loop over an [`AnnotatedGraph`].
//! - [`queue`] orders the nodes still waiting for a cell.
//! - [`ring`] finds the nearest free cell below a set of anchors.
//! - [`recenter`] pulls an anchor towards its neighbours after a placement.
//! - [`grid_index`] stores allocations with O(1) occupancy lookups.
//!
//! The result is a [`Layout`]: the effective column count and the ordered
//! list of `(id, x, y)` allocations, root first.

pub mod engine;
pub mod grid_index;
pub mod queue;
pub mod recenter;
pub mod ring;

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::Result;
use crate::graph::{annotate, AnnotatedGraph, Node};
use crate::types::{GridPos, TaskId};

pub use engine::allocate;

/// One placed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub id: TaskId,
    pub x: i32,
    pub y: i32,
}

impl Allocation {
    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }
}

/// Output of one allocation run.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    columns: usize,
    root: TaskId,
    allocations: Vec<Allocation>,
    #[serde(skip)]
    index: HashMap<TaskId, usize>,
}

impl Layout {
    pub(crate) fn from_grid(graph: &AnnotatedGraph, grid: &grid_index::GridIndex, columns: usize) -> Self {
        let allocations: Vec<Allocation> = grid
            .slots()
            .iter()
            .map(|slot| Allocation {
                id: graph.node(slot.node).id().to_string(),
                x: slot.pos.x,
                y: slot.pos.y,
            })
            .collect();
        let index = allocations
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();

        Self {
            columns,
            root: graph.root_id().to_string(),
            allocations,
            index,
        }
    }

    /// Effective (odd) column count used for this run.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    /// Allocations in placement order; the root is first.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn get(&self, id: &str) -> Option<&Allocation> {
        self.index.get(id).map(|&i| &self.allocations[i])
    }

    /// Number of rows in use.
    pub fn rows(&self) -> usize {
        self.allocations
            .iter()
            .map(|a| a.y as usize + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}

/// The root needs a true centre column, so even counts (including 0) are
/// bumped by one.
pub fn normalize_columns(columns: usize) -> usize {
    if columns % 2 == 0 { columns + 1 } else { columns }
}

/// Annotate `nodes` for `root_id` and allocate the result.
pub fn compute_layout(nodes: &[Node], root_id: &str, columns: usize) -> Result<Layout> {
    let graph = annotate(nodes, root_id)?;
    allocate(&graph, columns)
}
