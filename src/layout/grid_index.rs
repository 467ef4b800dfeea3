// src/layout/grid_index.rs

//! Allocation arena with O(1) occupancy and per-node lookup.
//!
//! Allocations are never removed, so a slot index doubles as the allocation
//! order. The only mutation after placement is [`GridIndex::move_column`].

use std::collections::{HashMap, HashSet};

use crate::graph::AnnotatedGraph;
use crate::types::GridPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Node index in the [`AnnotatedGraph`].
    pub node: usize,
    pub pos: GridPos,
}

#[derive(Debug, Clone, Default)]
pub struct GridIndex {
    slots: Vec<Slot>,
    occupied: HashSet<GridPos>,
    by_node: HashMap<usize, usize>,
}

impl GridIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` at `pos`. The caller guarantees the cell is free and the
    /// node is not yet placed.
    pub fn place(&mut self, node: usize, pos: GridPos) -> usize {
        debug_assert!(self.is_free(pos), "cell {pos} already occupied");
        debug_assert!(!self.by_node.contains_key(&node), "node {node} placed twice");

        let slot = self.slots.len();
        self.slots.push(Slot { node, pos });
        self.occupied.insert(pos);
        self.by_node.insert(node, slot);
        slot
    }

    pub fn is_free(&self, pos: GridPos) -> bool {
        !self.occupied.contains(&pos)
    }

    pub fn pos_of(&self, node: usize) -> Option<GridPos> {
        self.by_node.get(&node).map(|&slot| self.slots[slot].pos)
    }

    pub fn slot_of(&self, node: usize) -> Option<usize> {
        self.by_node.get(&node).copied()
    }

    /// Move an already placed node to another column of the same row.
    pub fn move_column(&mut self, node: usize, x: i32) {
        let Some(&slot) = self.by_node.get(&node) else {
            return;
        };
        let old = self.slots[slot].pos;
        let new = GridPos::new(x, old.y);
        if old == new {
            return;
        }
        debug_assert!(self.is_free(new), "cell {new} already occupied");

        self.occupied.remove(&old);
        self.occupied.insert(new);
        self.slots[slot].pos = new;
    }

    /// Placed nodes whose id is in `graph.node(node).required_by`, in
    /// allocation order.
    pub fn placed_dependents(&self, graph: &AnnotatedGraph, node: usize) -> Vec<Slot> {
        let mut found: Vec<usize> = graph
            .node(node)
            .required_by
            .iter()
            .filter_map(|id| graph.index_of(id))
            .filter_map(|idx| self.slot_of(idx))
            .collect();
        found.sort_unstable();
        found.dedup();
        found.into_iter().map(|slot| self.slots[slot]).collect()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
