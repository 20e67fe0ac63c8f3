// src/graph/dependency.rs

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::board::Board;
use crate::config::DependencyRow;
use crate::graph::levels::LevelMap;
use crate::types::TaskId;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct GraphNode {
    /// Direct prerequisites, in edge insertion order.
    deps: Vec<TaskId>,
    /// Direct dependents: tasks that list this one as a prerequisite.
    dependents: Vec<TaskId>,
}

/// A dependency edge that survived dangling-reference filtering.
///
/// Edges point the way the diagram draws them: from the prerequisite
/// (`source`) to the task waiting on it (`target`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub id: String,
    pub source: TaskId,
    pub target: TaskId,
}

/// In-memory dependency graph for one board snapshot.
///
/// Unlike a validated DAG this accepts whatever the persistence layer hands
/// over: edges to deleted tasks are dropped during construction and cycles
/// are kept as-is (see [`LevelMap`] for how levels still terminate).
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Task ids in discovery order (column order, then position).
    order: Vec<TaskId>,
    nodes: HashMap<TaskId, GraphNode>,
    edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    /// Build a graph from task ids and raw dependency rows.
    ///
    /// Runs in O(tasks + edges). Rows whose endpoints are not in `tasks` are
    /// skipped, and a repeated (task, prerequisite) pair keeps only its first
    /// row.
    pub fn new<I, S>(tasks: I, rows: &[DependencyRow]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        let mut order = Vec::new();
        let mut nodes: HashMap<TaskId, GraphNode> = HashMap::new();

        for task in tasks {
            let id = task.into();
            if nodes.contains_key(&id) {
                continue;
            }
            nodes.insert(id.clone(), GraphNode::default());
            order.push(id);
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();

        for row in rows {
            let task = row.task_id.as_str();
            let prereq = row.depends_on_task_id.as_str();

            if !nodes.contains_key(task) || !nodes.contains_key(prereq) {
                debug!(
                    edge = %row.id,
                    task = %task,
                    depends_on = %prereq,
                    "skipping dangling dependency edge"
                );
                continue;
            }
            if !seen.insert((task, prereq)) {
                debug!(edge = %row.id, "skipping duplicate dependency edge");
                continue;
            }

            if let Some(node) = nodes.get_mut(task) {
                node.deps.push(prereq.to_string());
            }
            if let Some(node) = nodes.get_mut(prereq) {
                node.dependents.push(task.to_string());
            }
            edges.push(DependencyEdge {
                id: row.id.clone(),
                source: prereq.to_string(),
                target: task.to_string(),
            });
        }

        Self {
            order,
            nodes,
            edges,
        }
    }

    /// Build the graph for an adapted board.
    pub fn from_board(board: &Board) -> Self {
        let tasks = board.tasks().map(|t| t.id.clone());
        Self::new(tasks, &board.edges)
    }

    /// All task ids, in discovery order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    pub fn task_count(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, task: &str) -> bool {
        self.nodes.contains_key(task)
    }

    /// Immediate prerequisites of a task, in edge insertion order.
    ///
    /// Unknown tasks have no prerequisites.
    pub fn dependencies_of(&self, task: &str) -> &[TaskId] {
        self.nodes
            .get(task)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks listing it as a prerequisite).
    pub fn dependents_of(&self, task: &str) -> &[TaskId] {
        self.nodes
            .get(task)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Surviving edges in insertion order.
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Tasks without prerequisites.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.tasks().filter(|t| self.dependencies_of(t).is_empty())
    }

    /// Tasks that can still be offered as a new prerequisite of `task`:
    /// everything except the task itself and its current prerequisites.
    pub fn candidate_prerequisites(&self, task: &str) -> Vec<&str> {
        let existing = self.dependencies_of(task);
        self.tasks()
            .filter(|t| *t != task && !existing.iter().any(|d| d == t))
            .collect()
    }

    /// Compute levels for every task (see [`LevelMap`]).
    pub fn levels(&self) -> LevelMap {
        LevelMap::compute(self)
    }

    /// Level of a single task. Prefer [`DependencyGraph::levels`] when more
    /// than one level is needed.
    pub fn level(&self, task: &str) -> usize {
        self.levels().get(task)
    }
}
