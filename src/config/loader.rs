// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::Result;

/// Load a task file from a given path and return the raw `RawTaskFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    load_from_str(&contents)
}

/// Deserialize a task file from TOML text.
pub fn load_from_str(contents: &str) -> Result<RawTaskFile> {
    let raw: RawTaskFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a task file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - an empty task list,
///   - empty or duplicate task ids,
///   - nonsensical `[layout]` values.
///
/// Cycles are checked later against the effective root, see
/// [`ensure_acyclic_from`](crate::config::ensure_acyclic_from).
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskFile> {
    let raw = load_from_path(&path)?;
    TaskFile::try_from(raw)
}

/// Same as [`load_and_validate`], for text already read into memory.
pub fn parse_and_validate(contents: &str) -> Result<TaskFile> {
    let raw = load_from_str(contents)?;
    TaskFile::try_from(raw)
}

/// Task file used when `--tasks` is not given.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Roadmap.toml")
}
