// src/board/snapshot.rs

//! Owned, versioned board snapshot.
//!
//! A snapshot is never mutated in place. Every mutation returns a new
//! snapshot with `version + 1`, re-adapted from the updated rows. Consumers
//! compare [`BoardSnapshot::fingerprint`] to decide whether anything derived
//! from the board must be recomputed.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::board::adapter::build_board;
use crate::board::fingerprint::compute_fingerprint;
use crate::board::view::Board;
use crate::config::{BoardFile, BoardRows, BoardSection, DependencyRow};
use crate::errors::{Result, TaskLinkError};
use crate::graph::{DependencyGraph, would_close_cycle};
use crate::types::TaskId;

#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    version: u64,
    fingerprint: String,
    section: BoardSection,
    rows: BoardRows,
    board: Board,
}

impl BoardSnapshot {
    /// First version of a board.
    pub fn new(section: BoardSection, rows: BoardRows) -> Self {
        Self::with_version(1, section, rows)
    }

    pub fn from_file(file: &BoardFile) -> Self {
        Self::new(file.board.clone(), file.rows.clone())
    }

    fn with_version(version: u64, section: BoardSection, rows: BoardRows) -> Self {
        let board = build_board(&section, &rows);
        let fingerprint = compute_fingerprint(&section, &rows);
        Self {
            version,
            fingerprint,
            section,
            rows,
            board,
        }
    }

    fn next(&self, rows: BoardRows) -> Self {
        let snapshot = Self::with_version(self.version + 1, self.section.clone(), rows);
        debug!(
            version = snapshot.version,
            fingerprint = %snapshot.fingerprint,
            "new board snapshot"
        );
        snapshot
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn section(&self) -> &BoardSection {
        &self.section
    }

    pub fn rows(&self) -> &BoardRows {
        &self.rows
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Build the dependency graph for this snapshot.
    pub fn graph(&self) -> DependencyGraph {
        DependencyGraph::from_board(&self.board)
    }

    /// Ids of tasks sitting in a Done column.
    pub fn done_task_ids(&self) -> HashSet<TaskId> {
        let done_title = self.section.done_column_title.as_str();
        self.board
            .columns
            .iter()
            .filter(|c| c.is_done(done_title))
            .flat_map(|c| c.tasks.iter().map(|t| t.id.clone()))
            .collect()
    }

    fn ensure_task(&self, task: &str) -> Result<()> {
        if self.board.task(task).is_none() {
            return Err(TaskLinkError::TaskNotFound(task.to_string()));
        }
        Ok(())
    }

    /// Record that `task` depends on `prerequisite`.
    ///
    /// Rejects unknown tasks, self-dependencies and duplicates. An edge that
    /// closes a cycle is accepted; it is only logged.
    pub fn add_dependency(&self, task: &str, prerequisite: &str) -> Result<Self> {
        self.ensure_task(task)?;
        self.ensure_task(prerequisite)?;

        if task == prerequisite {
            return Err(TaskLinkError::DependencyError(format!(
                "task '{task}' cannot depend on itself"
            )));
        }

        let exists = self
            .rows
            .dependencies
            .iter()
            .any(|d| d.task_id == task && d.depends_on_task_id == prerequisite);
        if exists {
            return Err(TaskLinkError::DependencyError(format!(
                "task '{task}' already depends on '{prerequisite}'"
            )));
        }

        if would_close_cycle(&self.graph(), task, prerequisite) {
            warn!(
                task = %task,
                depends_on = %prerequisite,
                "new dependency closes a cycle; levels for its members are approximate"
            );
        }

        let mut rows = self.rows.clone();
        let id = DependencyRow::unused_id(task, prerequisite, |id| {
            rows.dependencies.iter().any(|d| d.id == id)
        });
        rows.dependencies.push(DependencyRow::new(id, task, prerequisite));

        info!(task = %task, depends_on = %prerequisite, "dependency added");
        Ok(self.next(rows))
    }

    /// Remove every edge recording that `task` depends on `prerequisite`.
    pub fn remove_dependency(&self, task: &str, prerequisite: &str) -> Result<Self> {
        let mut rows = self.rows.clone();
        let before = rows.dependencies.len();
        rows.dependencies
            .retain(|d| !(d.task_id == task && d.depends_on_task_id == prerequisite));

        if rows.dependencies.len() == before {
            return Err(TaskLinkError::DependencyNotFound {
                task: task.to_string(),
                depends_on: prerequisite.to_string(),
            });
        }

        info!(task = %task, depends_on = %prerequisite, "dependency removed");
        Ok(self.next(rows))
    }

    /// Move `task` to `column` at index `position`, renumbering the positions
    /// of the source and destination columns.
    ///
    /// `position` is clamped to the destination column's length.
    pub fn move_task(&self, task: &str, column: &str, position: usize) -> Result<Self> {
        self.ensure_task(task)?;
        let source = self
            .board
            .column_of(task)
            .map(|c| c.id.clone())
            .ok_or_else(|| TaskLinkError::TaskNotFound(task.to_string()))?;
        let dest = self
            .board
            .column(column)
            .ok_or_else(|| TaskLinkError::ColumnNotFound(column.to_string()))?;

        let mut dest_order: Vec<TaskId> = dest
            .tasks
            .iter()
            .filter(|t| t.id != task)
            .map(|t| t.id.clone())
            .collect();
        let index = position.min(dest_order.len());
        dest_order.insert(index, task.to_string());

        let source_order: Vec<TaskId> = self
            .board
            .column(&source)
            .map(|c| {
                c.tasks
                    .iter()
                    .filter(|t| t.id != task)
                    .map(|t| t.id.clone())
                    .collect()
            })
            .unwrap_or_default();

        let mut rows = self.rows.clone();
        for row in rows.tasks.iter_mut() {
            if let Some(i) = dest_order.iter().position(|id| *id == row.id) {
                row.column_id = column.to_string();
                row.position = i as i64;
            } else if source != column {
                if let Some(i) = source_order.iter().position(|id| *id == row.id) {
                    row.position = i as i64;
                }
            }
        }

        info!(task = %task, from = %source, to = %column, position = index, "task moved");
        Ok(self.next(rows))
    }

    /// Delete `task` together with every edge that references it.
    pub fn delete_task(&self, task: &str) -> Result<Self> {
        self.ensure_task(task)?;

        let mut rows = self.rows.clone();
        rows.tasks.retain(|t| t.id != task);
        let before = rows.dependencies.len();
        rows.dependencies
            .retain(|d| d.task_id != task && d.depends_on_task_id != task);

        info!(
            task = %task,
            removed_edges = before - rows.dependencies.len(),
            "task deleted"
        );
        Ok(self.next(rows))
    }

    /// Replace the board section and all rows, e.g. after reloading the
    /// snapshot file.
    pub fn reload(&self, section: BoardSection, rows: BoardRows) -> Self {
        let snapshot = Self::with_version(self.version + 1, section, rows);
        info!(version = snapshot.version, "board snapshot reloaded");
        snapshot
    }
}
