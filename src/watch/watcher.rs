// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::load_and_validate;
use crate::engine::{BoardEvent, EngineEvent};

/// Handle for the snapshot file watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle
/// stops watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Whether `event` touches the file called `file_name` in a way that can
/// change its content.
pub fn is_board_event(event: &Event, file_name: &OsString) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}

fn watch_dir(board_path: &Path) -> PathBuf {
    match board_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Spawn a watcher for the snapshot file at `board_path`.
///
/// The parent directory is watched rather than the file itself, since many
/// editors save by replacing the file. Every relevant change re-reads the
/// file and sends `BoardEvent::Reload` into `runtime_tx`.
pub fn spawn_board_watcher(
    board_path: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<EngineEvent>,
) -> Result<WatcherHandle> {
    let board_path = board_path.into();
    let file_name = board_path
        .file_name()
        .map(|n| n.to_os_string())
        .with_context(|| format!("board path {:?} has no file name", board_path))?;
    let dir = watch_dir(&board_path);
    let dir = dir.canonicalize().unwrap_or(dir);

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("tasklink: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("tasklink: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    info!(path = %board_path.display(), "watching board file");

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if !is_board_event(&event, &file_name) {
                continue;
            }
            debug!(kind = ?event.kind, "board file changed");

            let file = match load_and_validate(&board_path) {
                Ok(file) => file,
                Err(err) => {
                    warn!(
                        path = %board_path.display(),
                        error = %err,
                        "failed to reload board file; keeping current snapshot"
                    );
                    continue;
                }
            };

            if runtime_tx
                .send(EngineEvent::Board(BoardEvent::Reload(file)))
                .await
                .is_err()
            {
                debug!("runtime channel closed; stopping watcher loop");
                break;
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}
