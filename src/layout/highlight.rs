// src/layout/highlight.rs

//! Hover highlighting. Pure display state, never persisted.

use crate::graph::{DependencyEdge, DependencyGraph};
use crate::types::TaskId;

/// Visual weight of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEmphasis {
    /// Nothing is hovered.
    Normal,
    /// The edge touches the hovered node.
    Highlighted,
    /// Another node is hovered.
    Dimmed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<TaskId>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the node `task`.
    pub fn enter(&mut self, task: impl Into<TaskId>) {
        self.hovered = Some(task.into());
    }

    /// Pointer left whatever node it was on.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn edge_emphasis(&self, edge: &DependencyEdge) -> EdgeEmphasis {
        self.emphasis(&edge.source, &edge.target)
    }

    /// Emphasis of an edge given by its endpoints.
    pub fn emphasis(&self, source: &str, target: &str) -> EdgeEmphasis {
        match self.hovered.as_deref() {
            None => EdgeEmphasis::Normal,
            Some(h) if source == h || target == h => EdgeEmphasis::Highlighted,
            Some(_) => EdgeEmphasis::Dimmed,
        }
    }

    /// Ids of the edges touching the hovered node.
    pub fn highlighted_edges<'g>(&self, graph: &'g DependencyGraph) -> Vec<&'g str> {
        graph
            .edges()
            .iter()
            .filter(|e| self.edge_emphasis(e) == EdgeEmphasis::Highlighted)
            .map(|e| e.id.as_str())
            .collect()
    }

    /// A node is highlighted when it is hovered, or is a direct prerequisite
    /// or direct dependent of the hovered node.
    pub fn is_node_highlighted(&self, graph: &DependencyGraph, task: &str) -> bool {
        let Some(h) = self.hovered.as_deref() else {
            return false;
        };
        h == task
            || graph.dependencies_of(h).iter().any(|d| d == task)
            || graph.dependents_of(h).iter().any(|d| d == task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DependencyRow;

    fn graph() -> DependencyGraph {
        DependencyGraph::new(
            ["a", "b", "c", "d"],
            &[
                DependencyRow::new("e1", "b", "a"),
                DependencyRow::new("e2", "c", "b"),
                DependencyRow::new("e3", "d", "a"),
            ],
        )
    }

    #[test]
    fn no_hover_means_normal_edges() {
        let g = graph();
        let hover = HoverState::new();
        assert!(g.edges().iter().all(|e| hover.edge_emphasis(e) == EdgeEmphasis::Normal));
        assert!(!hover.is_node_highlighted(&g, "a"));
    }

    #[test]
    fn hover_highlights_touching_edges_and_dims_others() {
        let g = graph();
        let mut hover = HoverState::new();
        hover.enter("b");

        assert_eq!(hover.highlighted_edges(&g), vec!["e1", "e2"]);
        assert_eq!(hover.edge_emphasis(&g.edges()[2]), EdgeEmphasis::Dimmed);
        assert!(hover.is_node_highlighted(&g, "a"));
        assert!(hover.is_node_highlighted(&g, "c"));
        assert!(!hover.is_node_highlighted(&g, "d"));

        hover.leave();
        assert!(hover.highlighted_edges(&g).is_empty());
    }
}
