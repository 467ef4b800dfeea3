use std::collections::HashMap;

use taskgrid::Node;
use taskgrid::errors::Result;
use taskgrid::source::TaskSource;
use taskgrid::types::TaskId;

/// A fake task source that:
/// - serves nodes from memory
/// - records every batch of ids it was asked for.
pub struct FakeTaskSource {
    nodes: HashMap<TaskId, Node>,
    pub requests: Vec<Vec<TaskId>>,
}

impl FakeTaskSource {
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
            requests: Vec::new(),
        }
    }

    /// Every id requested so far, in request order.
    pub fn requested_ids(&self) -> Vec<&str> {
        self.requests
            .iter()
            .flat_map(|batch| batch.iter().map(String::as_str))
            .collect()
    }
}

impl TaskSource for FakeTaskSource {
    fn fetch(&mut self, ids: &[TaskId]) -> Result<Vec<Node>> {
        self.requests.push(ids.to_vec());
        Ok(ids.iter().filter_map(|id| self.nodes.get(id).cloned()).collect())
    }
}
