// src/graph/levels.rs

//! Level (rank) assignment for the dependency graph.
//!
//! `level(t) = 0` when `t` has no prerequisites, otherwise
//! `1 + max(level(p))` over its prerequisites.
//!
//! The graph is not guaranteed to be acyclic, so levels are computed with an
//! explicit depth-first traversal that keeps two pieces of state apart:
//!
//! - `visiting`: tasks currently on the traversal stack,
//! - `finalized`: tasks whose level is known.
//!
//! Reaching a prerequisite that is still `visiting` means the traversal closed
//! a cycle. That prerequisite contributes its last-known level, which is 0
//! because it has not been finalized yet. The first cycle member reached
//! therefore ends up with the highest level of its cycle. The edge is recorded
//! in [`LevelMap::back_edges`] so the layout can route it separately.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::graph::dependency::DependencyGraph;
use crate::types::TaskId;

/// Finalized level for every task of a [`DependencyGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    levels: HashMap<TaskId, usize>,
    /// `(task, prerequisite)` pairs where the traversal hit a task still on
    /// its stack.
    back_edges: Vec<(TaskId, TaskId)>,
    max_level: usize,
}

/// One frame of the explicit DFS stack.
struct Frame<'g> {
    task: &'g str,
    deps: &'g [TaskId],
    next_dep: usize,
    level: usize,
}

impl<'g> Frame<'g> {
    fn new(graph: &'g DependencyGraph, task: &'g str) -> Self {
        Self {
            task,
            deps: graph.dependencies_of(task),
            next_dep: 0,
            level: 0,
        }
    }
}

impl LevelMap {
    /// Compute levels for all tasks, visiting roots in discovery order.
    pub fn compute(graph: &DependencyGraph) -> Self {
        let mut finalized: HashMap<TaskId, usize> = HashMap::with_capacity(graph.task_count());
        let mut visiting: HashSet<&str> = HashSet::new();
        let mut back_edges = Vec::new();

        for start in graph.tasks() {
            if finalized.contains_key(start) {
                continue;
            }

            let mut stack = vec![Frame::new(graph, start)];
            visiting.insert(start);

            while let Some(frame) = stack.last_mut() {
                if frame.next_dep < frame.deps.len() {
                    let deps = frame.deps;
                    let dep = deps[frame.next_dep].as_str();
                    frame.next_dep += 1;

                    if let Some(&dep_level) = finalized.get(dep) {
                        frame.level = frame.level.max(dep_level + 1);
                    } else if visiting.contains(dep) {
                        debug!(
                            task = %frame.task,
                            depends_on = %dep,
                            "dependency cycle reached; using last-known level 0"
                        );
                        back_edges.push((frame.task.to_string(), dep.to_string()));
                        frame.level = frame.level.max(1);
                    } else {
                        visiting.insert(dep);
                        stack.push(Frame::new(graph, dep));
                    }
                    continue;
                }

                // All prerequisites handled: finalize and report to the parent.
                let task = frame.task;
                let level = frame.level;
                stack.pop();
                visiting.remove(task);
                finalized.insert(task.to_string(), level);

                if let Some(parent) = stack.last_mut() {
                    parent.level = parent.level.max(level + 1);
                }
            }
        }

        let max_level = finalized.values().copied().max().unwrap_or(0);

        Self {
            levels: finalized,
            back_edges,
            max_level,
        }
    }

    /// Level of `task`; unknown tasks are level 0.
    pub fn get(&self, task: &str) -> usize {
        self.levels.get(task).copied().unwrap_or(0)
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Whether the traversal had to break at least one cycle.
    pub fn has_cycles(&self) -> bool {
        !self.back_edges.is_empty()
    }

    pub fn back_edges(&self) -> &[(TaskId, TaskId)] {
        &self.back_edges
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
