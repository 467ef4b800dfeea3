// src/graph/node.rs

//! Task records before and after annotation.

use crate::types::TaskId;

/// A task as supplied by the task source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: TaskId,
    pub title: String,
    /// External user id of the assignee, if any.
    pub owner: Option<String>,
    /// Ids of tasks this one depends on, in source order.
    ///
    /// Ids with no matching node in the current set are ignored everywhere.
    pub requires: Vec<TaskId>,
    pub closed: bool,
}

impl Node {
    /// An open, unowned task with no dependencies and an empty title.
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            owner: None,
            requires: Vec::new(),
            closed: false,
        }
    }
}

/// Values computed once per layout run for nodes reachable from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeMetrics {
    /// 0 for leaves, otherwise one more than the deepest resolvable dependency.
    pub depth: u32,
    /// Approximate descendant weight used to break ties. Shared descendants
    /// are counted once per path, so this over-counts diamonds.
    pub children: u64,
    /// Leaves: `closed`. Others: any resolvable dependency is active.
    pub active: bool,
}

impl NodeMetrics {
    /// Scheduling key; larger keys are placed earlier.
    pub fn priority(&self) -> (u32, u64, u8) {
        (self.depth, self.children, u8::from(self.active))
    }
}

/// A [`Node`] plus the reverse index and per-run metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedNode {
    pub node: Node,
    /// Ids of nodes that list this one in `requires`, first-seen order.
    pub required_by: Vec<TaskId>,
    /// `None` for nodes unreachable from the root; those are never laid out.
    pub metrics: Option<NodeMetrics>,
}

impl AnnotatedNode {
    pub(crate) fn new(node: Node) -> Self {
        Self {
            node,
            required_by: Vec::new(),
            metrics: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn is_reachable(&self) -> bool {
        self.metrics.is_some()
    }

    pub fn depth(&self) -> Option<u32> {
        self.metrics.map(|m| m.depth)
    }

    pub fn children(&self) -> Option<u64> {
        self.metrics.map(|m| m.children)
    }

    pub fn is_active(&self) -> bool {
        self.metrics.is_some_and(|m| m.active)
    }

    pub fn is_required_by(&self, id: &str) -> bool {
        self.required_by.iter().any(|r| r == id)
    }
}
