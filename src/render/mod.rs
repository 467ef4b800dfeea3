// src/render/mod.rs

//! Turning a [`Layout`](crate::layout::Layout) into something to look at.
//!
//! Nothing in here affects placement; it only reads the layout and the
//! annotated graph.

pub mod connectors;
pub mod geometry;
pub mod scene;
pub mod text;

pub use connectors::{build_links, Link, LinkStyle};
pub use geometry::{Geometry, PixelPos};
pub use scene::Scene;
pub use text::{render_annotations, render_grid, render_table};
