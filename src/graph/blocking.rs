// src/graph/blocking.rs

//! Blocking-state derivation.
//!
//! A task is blocked while at least one of its *direct* prerequisites sits
//! outside the Done column. The derivation is a pure function of the graph
//! and the set of finished task ids, so calling it twice on the same inputs
//! yields identical results, including list order.

use std::collections::{HashMap, HashSet};

use crate::graph::dependency::DependencyGraph;
use crate::types::TaskId;

/// Blocking status of a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockingEntry {
    pub task_id: TaskId,
    /// Unfinished prerequisites, in dependency order. Empty when not blocked.
    pub blocked_by: Vec<TaskId>,
}

/// Per-task blocking state for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockingState {
    /// One entry per task, in graph discovery order.
    entries: Vec<BlockingEntry>,
    index: HashMap<TaskId, usize>,
}

impl BlockingState {
    /// Derive `blocked_by = dependencies_of(task) \ done` for every task.
    pub fn derive(graph: &DependencyGraph, done: &HashSet<TaskId>) -> Self {
        let mut entries = Vec::with_capacity(graph.task_count());
        let mut index = HashMap::with_capacity(graph.task_count());

        for task in graph.tasks() {
            let blocked_by: Vec<TaskId> = graph
                .dependencies_of(task)
                .iter()
                .filter(|dep| !done.contains(dep.as_str()))
                .cloned()
                .collect();

            index.insert(task.to_string(), entries.len());
            entries.push(BlockingEntry {
                task_id: task.to_string(),
                blocked_by,
            });
        }

        Self { entries, index }
    }

    /// Unfinished prerequisites of `task`, or `None` when it is not blocked
    /// (or unknown).
    pub fn blocked_by(&self, task: &str) -> Option<&[TaskId]> {
        let entry = &self.entries[*self.index.get(task)?];
        if entry.blocked_by.is_empty() {
            None
        } else {
            Some(entry.blocked_by.as_slice())
        }
    }

    pub fn is_blocked(&self, task: &str) -> bool {
        self.blocked_by(task).is_some()
    }

    /// Blocked task ids in discovery order.
    pub fn blocked_tasks(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.blocked_by.is_empty())
            .map(|e| e.task_id.as_str())
    }

    pub fn entries(&self) -> &[BlockingEntry] {
        &self.entries
    }

    /// Tasks that were blocked in `previous` and are no longer blocked here.
    ///
    /// Tasks that did not exist in `previous` are never reported.
    pub fn newly_unblocked(&self, previous: &BlockingState) -> Vec<TaskId> {
        self.entries
            .iter()
            .filter(|e| e.blocked_by.is_empty() && previous.is_blocked(&e.task_id))
            .map(|e| e.task_id.clone())
            .collect()
    }
}
