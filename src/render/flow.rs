// src/render/flow.rs

//! Renderer-facing descriptors for the dependency flow view.

use crate::board::{BoardSnapshot, Task};
use crate::graph::{BlockingState, DependencyGraph, LevelMap};
use crate::types::{ColumnId, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: TaskId,
    pub level: usize,
    pub column_id: ColumnId,
    pub task: Task,
    pub dependencies: usize,
    pub dependents: usize,
    /// `None` when the task is not blocked.
    pub blocked_by: Option<Vec<TaskId>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub id: String,
    pub source: TaskId,
    pub target: TaskId,
}

/// Summary figures shown under the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowStats {
    pub total_tasks: usize,
    pub dependencies: usize,
    /// Tasks at least one other task depends on.
    pub blocking_tasks: usize,
    /// Tasks currently waiting on an unfinished prerequisite.
    pub blocked_tasks: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowView {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub stats: FlowStats,
}

impl FlowView {
    pub fn build(
        snapshot: &BoardSnapshot,
        graph: &DependencyGraph,
        levels: &LevelMap,
        blocking: &BlockingState,
    ) -> Self {
        let nodes: Vec<FlowNode> = snapshot
            .board()
            .tasks()
            .filter(|t| graph.contains(&t.id))
            .map(|t| FlowNode {
                id: t.id.clone(),
                level: levels.get(&t.id),
                column_id: t.column_id.clone(),
                task: t.clone(),
                dependencies: graph.dependencies_of(&t.id).len(),
                dependents: graph.dependents_of(&t.id).len(),
                blocked_by: blocking.blocked_by(&t.id).map(|b| b.to_vec()),
            })
            .collect();

        let edges: Vec<FlowEdge> = graph
            .edges()
            .iter()
            .map(|e| FlowEdge {
                id: e.id.clone(),
                source: e.source.clone(),
                target: e.target.clone(),
            })
            .collect();

        let stats = FlowStats {
            total_tasks: nodes.len(),
            dependencies: edges.len(),
            blocking_tasks: nodes.iter().filter(|n| n.dependents > 0).count(),
            blocked_tasks: nodes.iter().filter(|n| n.blocked_by.is_some()).count(),
        };

        Self {
            nodes,
            edges,
            stats,
        }
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
