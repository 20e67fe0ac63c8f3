// src/engine/mod.rs

//! Board engine.
//!
//! The pure core ([`core`]) owns the current [`BoardSnapshot`] and the state
//! derived from it, applies [`BoardEvent`]s and recomputes only when the
//! snapshot content changed. The async shell ([`runtime`]) feeds it from a
//! channel and hands every fresh view to a [`ViewSink`].
//!
//! [`BoardSnapshot`]: crate::board::BoardSnapshot

use crate::config::BoardFile;
use crate::types::{ColumnId, TaskId};

/// A change to the board, as produced by the UI layer or the file watcher.
#[derive(Debug, Clone)]
pub enum BoardEvent {
    /// `task_id` now depends on `depends_on`.
    DependencyAdded { task_id: TaskId, depends_on: TaskId },
    DependencyRemoved { task_id: TaskId, depends_on: TaskId },
    /// `task_id` was dropped into `column_id` at index `position`.
    TaskMoved {
        task_id: TaskId,
        column_id: ColumnId,
        position: usize,
    },
    TaskDeleted { task_id: TaskId },
    /// The snapshot file was re-read from disk.
    Reload(BoardFile),
}

/// Events flowing into the runtime.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    Board(BoardEvent),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    Shutdown,
}

impl From<BoardEvent> for EngineEvent {
    fn from(event: BoardEvent) -> Self {
        EngineEvent::Board(event)
    }
}

/// Result of feeding one event to the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStep {
    /// Derived state was rebuilt and should be published.
    pub recomputed: bool,
    /// Tasks that were blocked before this step and are not any more.
    pub unblocked: Vec<TaskId>,
    /// Rejected mutation, if any. The snapshot is left unchanged.
    pub rejected: Option<String>,
    pub keep_running: bool,
}

pub mod core;
pub mod runtime;
pub mod sink;

pub use self::core::{BoardEngine, Derived};
pub use runtime::Runtime;
pub use sink::{ViewSink, ViewUpdate};
