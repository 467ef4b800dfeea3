// src/watch/mod.rs

//! Re-running the layout when the task file changes.
//!
//! Every change produces a complete fresh run; nothing from the previous
//! layout is reused. Content hashing (`blake3`) filters out events that did
//! not actually change the file.

pub mod hash;
pub mod watcher;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub use hash::{content_hash, ChangeDetector};
pub use watcher::{spawn_file_watcher, WatcherHandle};

/// Editors tend to emit several events per save.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Block until Ctrl-C, calling `on_change` with the new file contents after
/// every save that changed them.
///
/// `initial_hash` is the hash of the contents already rendered, if any.
pub async fn watch_task_file<F>(path: &Path, initial_hash: Option<String>, mut on_change: F) -> Result<()>
where
    F: FnMut(&str),
{
    let (changes_tx, mut changes_rx) = mpsc::unbounded_channel::<()>();
    let _handle = spawn_file_watcher(path, changes_tx)?;

    let mut detector = initial_hash.map(ChangeDetector::with_hash).unwrap_or_default();

    loop {
        tokio::select! {
            msg = changes_rx.recv() => {
                if msg.is_none() {
                    debug!("watcher channel closed");
                    break;
                }

                tokio::time::sleep(DEBOUNCE).await;
                while changes_rx.try_recv().is_ok() {}

                let bytes = match tokio::fs::read(path).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        warn!(error = %err, "could not read task file after change");
                        continue;
                    }
                };

                if !detector.observe(&content_hash(&bytes)) {
                    continue;
                }

                let Some(text) = decode_task_file(bytes) else {
                    continue;
                };

                info!("task file changed; re-running layout");
                on_change(&text);
            }
            res = tokio::signal::ctrl_c() => {
                res?;
                info!("interrupted; stopping watch");
                break;
            }
        }
    }

    Ok(())
}

/// Same rule as the initial `read_to_string`: invalid UTF-8 is rejected,
/// not patched up.
fn decode_task_file(bytes: Vec<u8>) -> Option<String> {
    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(error = %err, "task file is not valid UTF-8; keeping previous output");
            None
        }
    }
}
