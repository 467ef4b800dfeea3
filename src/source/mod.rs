// src/source/mod.rs

//! Where task records come from.
//!
//! The layout engine never fetches anything itself. A [`TaskSource`] hands
//! out task records by id, and [`load_closure`] keeps asking it for every
//! referenced id that is still missing until the root's dependency closure
//! is complete. The order in which records arrive is the layout input order.

pub mod closure;
pub mod file;

use crate::errors::Result;
use crate::graph::Node;
use crate::types::TaskId;

pub use closure::load_closure;
pub use file::TaskFileSource;

/// A provider of task records, e.g. a tracker API or a local file.
pub trait TaskSource {
    /// Return records for the requested ids. Ids the source does not know
    /// are simply left out of the result.
    fn fetch(&mut self, ids: &[TaskId]) -> Result<Vec<Node>>;
}
