// src/layout/queue.rs

use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::graph::AnnotatedGraph;

/// Nodes still waiting for a cell, head first.
///
/// Built once with a stable descending sort on
/// `(depth, children, active)` so equal keys keep input order, then reshaped
/// after every placement by [`PlacementQueue::prioritize`].
#[derive(Debug, Clone)]
pub struct PlacementQueue {
    pending: VecDeque<usize>,
}

impl PlacementQueue {
    /// Every reachable node except the root.
    pub fn from_graph(graph: &AnnotatedGraph) -> Self {
        let root = graph.root_index();
        let mut pending: Vec<usize> = graph.reachable_indices().filter(|&idx| idx != root).collect();

        pending.sort_by_key(|&idx| Reverse(graph.node(idx).metrics.map(|m| m.priority())));

        Self {
            pending: pending.into(),
        }
    }

    pub fn pop_front(&mut self) -> Option<usize> {
        self.pending.pop_front()
    }

    /// Stable partition: nodes in `first` move to the front, both halves keep
    /// their relative order.
    pub fn prioritize(&mut self, first: &HashSet<usize>) {
        if first.is_empty() || self.pending.is_empty() {
            return;
        }

        let (front, back): (Vec<usize>, Vec<usize>) =
            self.pending.drain(..).partition(|idx| first.contains(idx));

        trace!(moved = front.len(), remaining = back.len(), "reprioritized placement queue");

        self.pending.extend(front);
        self.pending.extend(back);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending.iter().copied()
    }
}
