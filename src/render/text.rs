// src/render/text.rs

//! Plain-text renderings for the terminal.

use std::collections::HashMap;
use std::fmt::Write;

use crate::graph::AnnotatedGraph;
use crate::layout::Layout;
use crate::types::GridPos;

/// One line per allocation, in placement order.
pub fn render_table(graph: &AnnotatedGraph, layout: &Layout) -> String {
    let id_w = layout
        .allocations()
        .iter()
        .map(|a| a.id.len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_w$}  {:>3}  {:>3}  {:>5}  {:<6}  title",
        "id", "x", "y", "depth", "active"
    );

    for alloc in layout.allocations() {
        let Some(node) = graph.get(&alloc.id) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<id_w$}  {:>3}  {:>3}  {:>5}  {:<6}  {}",
            alloc.id,
            alloc.x,
            alloc.y,
            node.depth().unwrap_or(0),
            node.is_active(),
            node.node.title
        );
    }

    let _ = writeln!(
        out,
        "{} tasks, {} columns, {} rows",
        layout.len(),
        layout.columns(),
        layout.rows()
    );
    out
}

/// ASCII picture of the grid plus a legend.
///
/// The root is `*`, other tasks are numbered in placement order. Active
/// tasks are bracketed, inactive ones parenthesised.
pub fn render_grid(graph: &AnnotatedGraph, layout: &Layout) -> String {
    let mut cells: HashMap<GridPos, String> = HashMap::new();
    let mut legend = String::new();

    for (n, alloc) in layout.allocations().iter().enumerate() {
        let active = graph.get(&alloc.id).is_some_and(|node| node.is_active());
        let mark = if n == 0 { "*".to_string() } else { n.to_string() };
        let label = if active {
            format!("[{mark}]")
        } else {
            format!("({mark})")
        };
        let title = graph.get(&alloc.id).map(|node| node.node.title.as_str()).unwrap_or("");
        let _ = writeln!(legend, "{label:>6}  {}  {}", alloc.id, title);
        cells.insert(alloc.pos(), label);
    }

    let cell_w = cells.values().map(|l| l.len()).max().unwrap_or(1) + 1;
    let columns = i32::try_from(layout.columns()).unwrap_or(i32::MAX);
    let rows = i32::try_from(layout.rows()).unwrap_or(i32::MAX);

    let mut out = String::new();
    for y in 0..rows {
        let mut line = String::new();
        for x in 0..columns {
            let cell = cells.get(&GridPos::new(x, y)).map(String::as_str).unwrap_or(".");
            let _ = write!(line, "{cell:^cell_w$}");
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.push('\n');
    out.push_str(&legend);
    out
}

/// Dry-run output: the annotation of every task in input order.
pub fn render_annotations(graph: &AnnotatedGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "taskgrid dry-run");
    let _ = writeln!(out, "  root = {}", graph.root_id());
    let _ = writeln!(
        out,
        "  tasks = {} ({} reachable)",
        graph.len(),
        graph.reachable_count()
    );
    let _ = writeln!(out);

    for node in graph.iter() {
        let _ = writeln!(out, "  - {}  {}", node.id(), node.node.title);
        match node.metrics {
            Some(m) => {
                let _ = writeln!(
                    out,
                    "      depth: {}  children: {}  active: {}",
                    m.depth, m.children, m.active
                );
            }
            None => {
                let _ = writeln!(out, "      unreachable from root");
            }
        }
        if !node.node.requires.is_empty() {
            let _ = writeln!(out, "      requires: {:?}", node.node.requires);
        }
        if !node.required_by.is_empty() {
            let _ = writeln!(out, "      required_by: {:?}", node.required_by);
        }
        if let Some(owner) = &node.node.owner {
            let _ = writeln!(out, "      owner: {owner}");
        }
    }
    out
}
