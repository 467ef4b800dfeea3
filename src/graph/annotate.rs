// src/graph/annotate.rs

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::errors::{Result, TaskgridError};
use crate::graph::node::{AnnotatedNode, Node, NodeMetrics};
use crate::types::TaskId;

/// Annotated node set for one layout run, keyed by task id.
///
/// Nodes keep their input order; it is the tie-breaker for equal-priority
/// nodes during allocation. Only nodes reachable from the root via
/// `requires` carry metrics.
#[derive(Debug, Clone)]
pub struct AnnotatedGraph {
    nodes: Vec<AnnotatedNode>,
    index: HashMap<TaskId, usize>,
    /// Resolvable `requires` of each node as node indices (duplicates kept).
    resolved: Vec<Vec<usize>>,
    root: usize,
}

impl AnnotatedGraph {
    pub fn root(&self) -> &AnnotatedNode {
        &self.nodes[self.root]
    }

    pub fn root_id(&self) -> &str {
        self.nodes[self.root].id()
    }

    pub fn root_index(&self) -> usize {
        self.root
    }

    pub fn get(&self, id: &str) -> Option<&AnnotatedNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node at an index previously obtained from this graph.
    pub fn node(&self, idx: usize) -> &AnnotatedNode {
        &self.nodes[idx]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in input order, reachable or not.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedNode> {
        self.nodes.iter()
    }

    /// Indices of nodes reachable from the root, in input order.
    pub fn reachable_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_reachable())
            .map(|(idx, _)| idx)
    }

    pub fn reachable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_reachable()).count()
    }

    /// Indices of the nodes `idx` requires that exist in this graph.
    pub fn resolved_requires(&self, idx: usize) -> &[usize] {
        &self.resolved[idx]
    }
}

/// Build the annotated graph for `root_id`.
///
/// Reverse edges (`required_by`) are built over the whole node set. Metrics
/// are filled in for the root and everything it transitively requires.
///
/// Errors:
/// - [`TaskgridError::MissingRoot`] if `root_id` is not in `nodes`.
/// - [`TaskgridError::CyclicDependency`] if a cycle is reachable from the root.
pub fn annotate(nodes: &[Node], root_id: &str) -> Result<AnnotatedGraph> {
    let (mut arena, index) = index_nodes(nodes);

    link_required_by(&mut arena, &index);

    let root = match index.get(root_id) {
        Some(&idx) => idx,
        None => {
            warn!(root = %root_id, tasks = arena.len(), "root task not present in node set");
            return Err(TaskgridError::MissingRoot(root_id.to_string()));
        }
    };

    let resolved: Vec<Vec<usize>> = arena
        .iter()
        .map(|n| {
            n.node
                .requires
                .iter()
                .filter_map(|id| index.get(id).copied())
                .collect()
        })
        .collect();

    compute_metrics(&mut arena, &resolved, root)?;

    let graph = AnnotatedGraph {
        nodes: arena,
        index,
        resolved,
        root,
    };

    debug!(
        root = %root_id,
        tasks = graph.len(),
        reachable = graph.reachable_count(),
        "annotated task graph"
    );

    Ok(graph)
}

/// A repeated id keeps its first slot; the later record replaces the data.
fn index_nodes(nodes: &[Node]) -> (Vec<AnnotatedNode>, HashMap<TaskId, usize>) {
    let mut arena: Vec<AnnotatedNode> = Vec::with_capacity(nodes.len());
    let mut index: HashMap<TaskId, usize> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        match index.get(&node.id) {
            Some(&idx) => {
                debug!(task = %node.id, "duplicate task id; later record replaces earlier one");
                arena[idx].node = node.clone();
            }
            None => {
                index.insert(node.id.clone(), arena.len());
                arena.push(AnnotatedNode::new(node.clone()));
            }
        }
    }

    (arena, index)
}

fn link_required_by(arena: &mut [AnnotatedNode], index: &HashMap<TaskId, usize>) {
    for i in 0..arena.len() {
        // clone to avoid borrowing issues while mutating other entries
        let id = arena[i].node.id.clone();
        let requires = arena[i].node.requires.clone();

        for dep in requires {
            match index.get(&dep) {
                Some(&target) => {
                    if !arena[target].is_required_by(&id) {
                        arena[target].required_by.push(id.clone());
                    }
                }
                None => {
                    trace!(task = %id, dep = %dep, "ignoring dangling dependency");
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Enter(usize),
    Exit(usize),
}

/// Post-order walk over `requires` from `root` with an explicit stack.
///
/// Every frame pushed above a node's `Exit` belongs to that node's subtree,
/// so entering a node that is still `InProgress` means a cycle.
fn compute_metrics(arena: &mut [AnnotatedNode], resolved: &[Vec<usize>], root: usize) -> Result<()> {
    let mut state = vec![Visit::Unvisited; arena.len()];
    let mut path: Vec<usize> = Vec::new();
    let mut stack = vec![Frame::Enter(root)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(idx) => match state[idx] {
                Visit::Done => {}
                Visit::InProgress => {
                    let chain = describe_cycle(arena, &path, idx);
                    warn!(task = %arena[idx].id(), %chain, "dependency cycle reachable from root");
                    return Err(TaskgridError::CyclicDependency(chain));
                }
                Visit::Unvisited => {
                    state[idx] = Visit::InProgress;
                    path.push(idx);
                    stack.push(Frame::Exit(idx));
                    for &dep in resolved[idx].iter().rev() {
                        if state[dep] != Visit::Done {
                            stack.push(Frame::Enter(dep));
                        }
                    }
                }
            },
            Frame::Exit(idx) => {
                let metrics = metrics_from_deps(arena, &resolved[idx], arena[idx].node.closed);
                trace!(
                    task = %arena[idx].id(),
                    depth = metrics.depth,
                    children = metrics.children,
                    active = metrics.active,
                    "computed node metrics"
                );
                arena[idx].metrics = Some(metrics);
                state[idx] = Visit::Done;
                path.pop();
            }
        }
    }

    Ok(())
}

fn metrics_from_deps(arena: &[AnnotatedNode], deps: &[usize], closed: bool) -> NodeMetrics {
    if deps.is_empty() {
        return NodeMetrics {
            depth: 0,
            children: 0,
            active: closed,
        };
    }

    let dep_metrics: Vec<NodeMetrics> = deps.iter().filter_map(|&d| arena[d].metrics).collect();

    let depth = dep_metrics.iter().map(|m| m.depth).max().unwrap_or(0) + 1;
    let children = dep_metrics
        .iter()
        .fold(deps.len() as u64, |acc, m| acc.saturating_add(m.children));
    let active = dep_metrics.iter().any(|m| m.active);

    NodeMetrics {
        depth,
        children,
        active,
    }
}

/// "A -> B -> C -> A", following `requires` from the first repeated node.
fn describe_cycle(arena: &[AnnotatedNode], path: &[usize], repeated: usize) -> String {
    let start = path.iter().position(|&p| p == repeated).unwrap_or(0);
    path[start..]
        .iter()
        .chain(std::iter::once(&repeated))
        .map(|&idx| arena[idx].id())
        .collect::<Vec<_>>()
        .join(" -> ")
}
