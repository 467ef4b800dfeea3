// src/watch/hash.rs

use tracing::debug;

/// Hash of an in-memory buffer.
pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Remembers the last seen content hash so that saves which do not change
/// the bytes (touch, editor swap files) do not trigger a re-layout.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    last: Option<String>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with the hash of what has already been rendered.
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            last: Some(hash.into()),
        }
    }

    /// Record `hash`; returns `true` if it differs from the previous one.
    pub fn observe(&mut self, hash: &str) -> bool {
        if self.last.as_deref() == Some(hash) {
            debug!(hash = %hash, "content unchanged");
            return false;
        }
        self.last = Some(hash.to_string());
        true
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
