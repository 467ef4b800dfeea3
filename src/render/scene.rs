// src/render/scene.rs

use serde::Serialize;

use crate::errors::Result;
use crate::graph::AnnotatedGraph;
use crate::layout::Layout;
use crate::render::connectors::{build_links, Link};
use crate::render::geometry::{Geometry, PixelPos};

/// Everything an external renderer needs to draw the roadmap.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub root: String,
    pub columns: usize,
    pub rows: usize,
    pub canvas: CanvasSize,
    pub nodes: Vec<SceneNode>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    pub id: String,
    pub title: String,
    pub owner: Option<String>,
    pub closed: bool,
    pub active: bool,
    pub depth: u32,
    /// The root is drawn without a border or label.
    pub is_root: bool,
    pub x: i32,
    pub y: i32,
    pub center: PixelPos,
}

impl Scene {
    pub fn build(graph: &AnnotatedGraph, layout: &Layout, geometry: &Geometry) -> Self {
        let columns = layout.columns();

        let nodes = layout
            .allocations()
            .iter()
            .filter_map(|alloc| {
                let node = graph.get(&alloc.id)?;
                Some(SceneNode {
                    id: alloc.id.clone(),
                    title: node.node.title.clone(),
                    owner: node.node.owner.clone(),
                    closed: node.node.closed,
                    active: node.is_active(),
                    depth: node.depth().unwrap_or(0),
                    is_root: alloc.id == layout.root_id(),
                    x: alloc.x,
                    y: alloc.y,
                    center: geometry.cell_center(alloc.pos(), columns),
                })
            })
            .collect();

        let rows = layout.rows();
        let max_row = u32::try_from(rows.saturating_sub(1)).unwrap_or(u32::MAX);

        Self {
            root: layout.root_id().to_string(),
            columns,
            rows,
            canvas: CanvasSize {
                width: geometry.width,
                height: geometry.canvas_height(max_row),
            },
            nodes,
            links: build_links(graph, layout, geometry),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
