// src/config/mod.rs

//! Task file loading and validation for taskgrid.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//! - Validate basic invariants like unique ids and an acyclic root closure
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_from_str, parse_and_validate};
pub use model::{LayoutSection, RawTaskFile, TaskEntry, TaskFile};
pub use validate::{ensure_acyclic_from, validate_task_file};
