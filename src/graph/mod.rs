// src/graph/mod.rs

//! Task graph representation and annotation.
//!
//! - [`node`] holds the raw [`Node`] input record and its annotated form.
//! - [`annotate`] builds an [`AnnotatedGraph`] for a chosen root: reverse
//!   edges over the whole node set, plus depth / weight / active metrics for
//!   every node reachable from the root.

pub mod annotate;
pub mod node;

pub use annotate::{annotate, AnnotatedGraph};
pub use node::{AnnotatedNode, Node, NodeMetrics};
