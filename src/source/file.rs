// src/source/file.rs

use std::collections::HashMap;

use crate::config::TaskFile;
use crate::errors::Result;
use crate::graph::Node;
use crate::source::TaskSource;
use crate::types::TaskId;

/// Serves task records out of a loaded task file.
#[derive(Debug, Clone)]
pub struct TaskFileSource {
    tasks: HashMap<TaskId, Node>,
}

impl TaskFileSource {
    pub fn new(file: &TaskFile) -> Self {
        let tasks = file
            .task
            .iter()
            .map(|entry| (entry.id.clone(), entry.to_node()))
            .collect();
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskSource for TaskFileSource {
    fn fetch(&mut self, ids: &[TaskId]) -> Result<Vec<Node>> {
        Ok(ids.iter().filter_map(|id| self.tasks.get(id).cloned()).collect())
    }
}
