//! Debounced watching of the input directory for `formgen generate --watch`.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// One debounced batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Rust sources that were created, modified or removed.
    Changed(Vec<PathBuf>),
    Failed(String),
}

pub struct FileWatcher {
    root: PathBuf,
    debounce: Duration,
}

impl FileWatcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    pub fn with_debounce(self, ms: u64) -> Self {
        Self {
            debounce: Duration::from_millis(ms),
            ..self
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start watching. Events stop when the returned debouncer is dropped.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel();
        let init = |e: notify::Error| WatchError::Init(e.to_string());

        let mut debouncer = new_debouncer(self.debounce, move |result: DebounceEventResult| {
            if let Some(event) = batch(result) {
                // The receiver is gone once the CLI stops listening.
                let _ = tx.send(event);
            }
        })
        .map_err(init)?;

        debouncer
            .watcher()
            .watch(&self.root, RecursiveMode::Recursive)
            .map_err(init)?;

        tracing::debug!(root = %self.root.display(), debounce = ?self.debounce, "watching");
        Ok((debouncer, rx))
    }
}

fn batch(result: DebounceEventResult) -> Option<WatchEvent> {
    match result {
        Ok(events) => rust_sources(events.into_iter().map(|event| event.path)),
        Err(e) => Some(WatchEvent::Failed(e.to_string())),
    }
}

/// `Changed` with the deduplicated `.rs` paths, or `None` if there are none.
fn rust_sources(paths: impl IntoIterator<Item = PathBuf>) -> Option<WatchEvent> {
    let mut sources: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect();
    sources.sort();
    sources.dedup();
    (!sources.is_empty()).then_some(WatchEvent::Changed(sources))
}
