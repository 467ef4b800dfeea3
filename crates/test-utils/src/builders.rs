#![allow(dead_code)]

use taskgrid::Node;
use taskgrid::config::{LayoutSection, RawTaskFile, TaskEntry, TaskFile};
use taskgrid::types::OutputFormat;

/// Builder for `TaskFile` to simplify test setup.
pub struct TaskFileBuilder {
    file: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            file: RawTaskFile {
                layout: LayoutSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskEntry) -> Self {
        self.file.task.push(task);
        self
    }

    pub fn with_node(self, node: Node) -> Self {
        self.with_task(TaskEntry {
            id: node.id,
            title: node.title,
            owner: node.owner,
            requires: node.requires,
            closed: node.closed,
        })
    }

    pub fn root(mut self, id: &str) -> Self {
        self.file.layout.root = Some(id.to_string());
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.file.layout.columns = Some(columns);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.file.layout.width = width;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.file.layout.format = format;
        self
    }

    /// The raw file, for tests that exercise validation themselves.
    pub fn build_raw(self) -> RawTaskFile {
        self.file
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.file).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Node`.
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            node: Node {
                title: format!("Task {id}"),
                ..Node::new(id)
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.node.title = title.to_string();
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.node.owner = Some(owner.to_string());
        self
    }

    pub fn requires(mut self, dep: &str) -> Self {
        self.node.requires.push(dep.to_string());
        self
    }

    pub fn requires_all(mut self, deps: &[&str]) -> Self {
        self.node.requires.extend(deps.iter().map(|d| d.to_string()));
        self
    }

    pub fn closed(mut self, val: bool) -> Self {
        self.node.closed = val;
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}

/// Shorthand for `NodeBuilder::new(id).requires_all(deps).closed(closed).build()`.
pub fn node(id: &str, deps: &[&str], closed: bool) -> Node {
    NodeBuilder::new(id).requires_all(deps).closed(closed).build()
}
