//! Content-diff polling of the command files.
//!
//! One background thread reads every watched file once per tick and forwards
//! changed, non-blank contents over a bounded channel. Dispatch happens on the
//! receiving side, one event at a time.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const CHANNEL_CAPACITY: usize = 64;

/// Which command file an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Mode,
    Gomoku,
    Furniture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub source: Source,
    pub contents: String,
}

/// Tracks one file and reports when its content changes.
#[derive(Debug)]
pub struct FileWatcher {
    source: Source,
    path: PathBuf,
    last: Option<String>,
}

impl FileWatcher {
    /// Watch `path`, treating whatever it holds right now as already seen.
    pub fn new(source: Source, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last = read_non_blank(&path);
        if last.is_some() {
            tracing::debug!(path = %path.display(), "Skipping initial command file content");
        }
        Self { source, path, last }
    }

    /// New content since the previous poll, if any. Missing, unreadable and
    /// blank files count as "no update".
    pub fn poll(&mut self) -> Option<String> {
        let contents = read_non_blank(&self.path)?;
        if self.last.as_deref() == Some(contents.as_str()) {
            return None;
        }
        self.last = Some(contents.clone());
        Some(contents)
    }
}

fn read_non_blank(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => None,
        Ok(contents) => Some(contents),
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(%err, path = %path.display(), "Command file unreadable this tick");
            }
            None
        }
    }
}

/// Poll every watcher once, in order.
pub fn poll_all(watchers: &mut [FileWatcher]) -> Vec<WatchEvent> {
    watchers
        .iter_mut()
        .filter_map(|watcher| {
            watcher.poll().map(|contents| WatchEvent {
                source: watcher.source,
                contents,
            })
        })
        .collect()
}

pub struct WatchHandle {
    pub rx: Receiver<WatchEvent>,
    stop: Arc<AtomicBool>,
    join: thread::JoinHandle<()>,
}

impl WatchHandle {
    /// Ask the poll thread to exit and wait for it.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        drop(self.rx);
        if self.join.join().is_err() {
            tracing::warn!("Watcher thread panicked");
        }
    }
}

/// Start polling on a background thread. The channel closes after
/// `max_polls` ticks when a limit is given.
pub fn spawn(
    mut watchers: Vec<FileWatcher>,
    interval: Duration,
    max_polls: Option<u64>,
) -> WatchHandle {
    let (tx, rx) = mpsc::sync_channel::<WatchEvent>(CHANNEL_CAPACITY);
    let stop = Arc::new(AtomicBool::new(false));
    let thread_stop = Arc::clone(&stop);

    let join = thread::spawn(move || {
        for watcher in &watchers {
            tracing::info!(source = ?watcher.source, path = %watcher.path.display(), "Watching command file");
        }
        let mut ticks = 0u64;
        while !thread_stop.load(Ordering::Relaxed) {
            if max_polls.is_some_and(|max| ticks >= max) {
                tracing::info!(ticks, "Poll limit reached");
                break;
            }
            ticks += 1;

            for event in poll_all(&mut watchers) {
                if tx.send(event).is_err() {
                    return;
                }
            }
            thread::sleep(interval);
        }
    });

    WatchHandle { rx, stop, join }
}
