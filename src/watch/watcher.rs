// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the directory containing `file` and send a unit message whenever
/// an event touches `file` itself.
///
/// The parent directory is watched rather than the file so that editors
/// which save by rename-and-replace keep being observed.
pub fn spawn_file_watcher(file: &Path, changes_tx: mpsc::UnboundedSender<()>) -> Result<WatcherHandle> {
    let dir = watch_dir(file);
    let file_name: OsString = file
        .file_name()
        .with_context(|| format!("task file path has no file name: {:?}", file))?
        .to_os_string();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_relevant(&event, &file_name) {
                    // Receiver gone means the watch loop is shutting down.
                    let _ = changes_tx.send(());
                }
            }
            Err(err) => {
                // We can't log via tracing here easily, so fallback to stderr.
                eprintln!("taskgrid: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!("watching {:?} for changes", file);

    Ok(WatcherHandle { _inner: watcher })
}

fn watch_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    let hit = event
        .paths
        .iter()
        .any(|p| p.file_name().is_some_and(|name| name == file_name.as_os_str()));
    if hit {
        debug!(?event, "task file event");
    }
    hit
}
