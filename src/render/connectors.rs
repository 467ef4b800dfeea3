// src/render/connectors.rs

//! Links between placed tasks, as polylines in pixel space.

use serde::Serialize;

use crate::graph::AnnotatedGraph;
use crate::layout::Layout;
use crate::render::geometry::{Geometry, PixelPos};
use crate::types::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// The dependency's chain is active.
    Active,
    /// An active task waiting on an assigned dependency.
    Assigned,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    /// The dependent task.
    pub from: TaskId,
    /// The task it requires.
    pub to: TaskId,
    pub style: LinkStyle,
    /// Starts at the lower of the two boxes.
    pub path: Vec<PixelPos>,
}

pub fn link_style(dependent_active: bool, dependency_active: bool, dependency_assigned: bool) -> LinkStyle {
    if dependency_active {
        LinkStyle::Active
    } else if dependent_active && dependency_assigned {
        LinkStyle::Assigned
    } else {
        LinkStyle::Inactive
    }
}

/// Vertical, diagonal, vertical: a quarter of the height straight out of
/// each box with the diagonal in between.
pub fn angular_path(a: PixelPos, b: PixelPos) -> Vec<PixelPos> {
    let (from, to) = if a.y < b.y { (b, a) } else { (a, b) };
    let dy = to.y - from.y;
    vec![
        from,
        PixelPos { x: from.x, y: from.y + dy / 4.0 },
        PixelPos { x: to.x, y: from.y + 3.0 * dy / 4.0 },
        to,
    ]
}

/// One link per `requires` entry where both ends are placed, in placement
/// order of the dependent.
pub fn build_links(graph: &AnnotatedGraph, layout: &Layout, geometry: &Geometry) -> Vec<Link> {
    let columns = layout.columns();
    let mut links = Vec::new();

    for alloc in layout.allocations() {
        let Some(dependent) = graph.get(&alloc.id) else {
            continue;
        };
        let from_px = geometry.cell_center(alloc.pos(), columns);

        for dep_id in &dependent.node.requires {
            let (Some(dependency), Some(dep_alloc)) = (graph.get(dep_id), layout.get(dep_id)) else {
                continue;
            };
            let to_px = geometry.cell_center(dep_alloc.pos(), columns);

            links.push(Link {
                from: alloc.id.clone(),
                to: dep_id.clone(),
                style: link_style(
                    dependent.is_active(),
                    dependency.is_active(),
                    dependency.node.owner.is_some(),
                ),
                path: angular_path(to_px, from_px),
            });
        }
    }

    links
}
