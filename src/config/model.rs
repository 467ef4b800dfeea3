// src/config/model.rs

use serde::Deserialize;

use crate::graph::Node;
use crate::types::OutputFormat;

/// Task file exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [layout]
/// root = "T1"
/// width = 2500
///
/// [[task]]
/// id = "T1"
/// title = "Launch"
/// requires = ["T2"]
///
/// [[task]]
/// id = "T2"
/// title = "Write docs"
/// owner = "user-7"
/// closed = true
/// ```
///
/// Tasks are an array of tables so that file order is preserved. Layout
/// input order is not file order: it is the order in which the root's
/// closure is loaded (root first, then breadth-first by reference), see
/// [`load_closure`](crate::source::load_closure).
#[derive(Debug, Clone, Deserialize)]
pub struct RawTaskFile {
    #[serde(default)]
    pub layout: LayoutSection,

    #[serde(default)]
    pub task: Vec<TaskEntry>,
}

/// A validated task file. Only constructed through `TryFrom<RawTaskFile>`.
#[derive(Debug, Clone)]
pub struct TaskFile {
    pub layout: LayoutSection,
    pub task: Vec<TaskEntry>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(layout: LayoutSection, task: Vec<TaskEntry>) -> Self {
        Self { layout, task }
    }

    pub fn get(&self, id: &str) -> Option<&TaskEntry> {
        self.task.iter().find(|t| t.id == id)
    }

    /// All tasks as layout input, in file order.
    pub fn nodes(&self) -> Vec<Node> {
        self.task.iter().map(TaskEntry::to_node).collect()
    }
}

/// `[layout]` section: root selection, grid size and presentation geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    /// Root task id. Can be overridden with `--root`.
    #[serde(default)]
    pub root: Option<String>,

    /// Explicit column count. If `None`, derived from `width`.
    #[serde(default)]
    pub columns: Option<usize>,

    /// Display width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Narrower displays are laid out as if they were this wide.
    #[serde(default = "default_width")]
    pub min_width: u32,

    #[serde(default = "default_column_width")]
    pub column_width: u32,

    #[serde(default = "default_row_height")]
    pub row_height: u32,

    /// Pixel offset of row 0 from the top of the canvas.
    #[serde(default = "default_top_offset")]
    pub top_offset: u32,

    /// Minimum canvas height in pixels.
    #[serde(default)]
    pub viewport_height: u32,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_width() -> u32 {
    2500
}

fn default_column_width() -> u32 {
    180
}

fn default_row_height() -> u32 {
    150
}

fn default_top_offset() -> u32 {
    170
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            root: None,
            columns: None,
            width: default_width(),
            min_width: default_width(),
            column_width: default_column_width(),
            row_height: default_row_height(),
            top_offset: default_top_offset(),
            viewport_height: 0,
            format: OutputFormat::default(),
        }
    }
}

/// `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEntry {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// External user id of the assignee.
    #[serde(default)]
    pub owner: Option<String>,

    /// Ids of tasks this one depends on. Unknown ids are tolerated.
    #[serde(default)]
    pub requires: Vec<String>,

    #[serde(default)]
    pub closed: bool,
}

impl TaskEntry {
    pub fn to_node(&self) -> Node {
        Node {
            id: self.id.clone(),
            title: self.title.clone(),
            owner: self.owner.clone(),
            requires: self.requires.clone(),
            closed: self.closed,
        }
    }
}
