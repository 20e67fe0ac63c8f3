// src/board/view.rs

//! Nested board shape consumed by the graph, blocking and layout code.

use crate::config::DependencyRow;
use crate::types::{Category, ColumnId, TaskId};

/// A task as shown on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
    pub assignee_name: Option<String>,
    pub assignee_id: Option<String>,
    pub due_date: Option<String>,
    pub category: Category,
    pub position: i64,
    /// Prerequisite ids taken from the board's dependency rows, in row order.
    /// May still contain ids of deleted tasks.
    pub depends_on: Vec<TaskId>,
}

impl Task {
    /// Display name of the assignee, falling back to the user id.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee_name
            .as_deref()
            .or(self.assignee_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub position: i64,
    /// Tasks sorted by position.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Whether this column is the finished stage, comparing titles
    /// case-insensitively.
    pub fn is_done(&self, done_title: &str) -> bool {
        done_title_key(&self.title) == done_title_key(done_title)
    }
}

/// Normalised form of a Done column title: trimmed, ASCII letters folded.
pub fn done_title_key(title: &str) -> String {
    title.trim().to_ascii_lowercase()
}

/// One board: columns in position order, plus the dependency rows whose
/// dependent task lives on this board.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub edges: Vec<DependencyRow>,
}

impl Board {
    /// All tasks in discovery order: column by column, then by position.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks().find(|t| t.id == id)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Column currently holding `task`.
    pub fn column_of(&self, task: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.tasks.iter().any(|t| t.id == task))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
