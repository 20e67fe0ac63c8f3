// src/watch/mod.rs

//! Watching the board snapshot file.
//!
//! A `notify` watcher observes the directory holding the snapshot file. When
//! the file changes it is re-read and validated, and the result is sent to
//! the runtime as a `Reload` event. Files that fail to load are reported and
//! otherwise ignored, so a half-saved file never tears down the runtime.

pub mod watcher;

pub use watcher::{WatcherHandle, is_board_event, spawn_board_watcher};
