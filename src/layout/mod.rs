// src/layout/mod.rs

//! Layered (Sugiyama-style) layout of the dependency diagram.
//!
//! 1. Layer assignment: the rank of a task is its level.
//! 2. Long edges are split with dummy nodes; barycenter sweeps reduce
//!    crossings ([`ordering`]).
//! 3. Coordinates are assigned per rank ([`position`]).
//! 4. Edges are routed as curves between node anchors ([`routing`]).
//!
//! The layout never fails: cyclic graphs still get finite coordinates, their
//! backward edges are simply drawn as direct curves.

pub mod buckets;
pub mod config;
pub mod highlight;
pub mod ordering;
pub mod position;
pub mod routing;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::graph::{DependencyGraph, LevelMap};
use crate::types::TaskId;

pub use buckets::LevelBuckets;
pub use config::LayoutConfig;
pub use highlight::{EdgeEmphasis, HoverState};
pub use ordering::{LayerNode, LayeredGraph};
pub use routing::{Point, Rect};

/// A task node with its final box.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: TaskId,
    pub level: usize,
    /// Index among the tasks of its rank after crossing reduction.
    pub order: usize,
    pub rect: Rect,
}

/// A dependency edge with its route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    pub id: String,
    /// Prerequisite task.
    pub source: TaskId,
    /// Dependent task.
    pub target: TaskId,
    /// Source anchor, bend points, target anchor.
    pub points: Vec<Point>,
    /// SVG path data.
    pub path: String,
    /// False for edges that do not advance to a higher rank (cycles).
    pub forward: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<RoutedEdge>,
    pub width: f32,
    pub height: f32,
    /// Remaining crossings between adjacent ranks.
    pub crossings: usize,
    index: HashMap<TaskId, usize>,
}

impl Layout {
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Task ids of one rank in drawing order.
    pub fn rank(&self, level: usize) -> Vec<&str> {
        let mut nodes: Vec<&PositionedNode> =
            self.nodes.iter().filter(|n| n.level == level).collect();
        nodes.sort_by_key(|n| n.order);
        nodes.into_iter().map(|n| n.id.as_str()).collect()
    }
}

/// Lay out the whole graph.
pub fn compute_layout(graph: &DependencyGraph, levels: &LevelMap, config: &LayoutConfig) -> Layout {
    let buckets = LevelBuckets::new(graph, levels);
    let mut layered = LayeredGraph::build(graph, levels, &buckets);
    let crossings = layered.minimize_crossings(config.crossing_sweeps);
    let placement = position::assign_coordinates(&layered, config);

    let mut nodes = Vec::with_capacity(graph.task_count());
    let mut index = HashMap::with_capacity(graph.task_count());
    for (rank, layer) in layered.layers().iter().enumerate() {
        let mut order = 0;
        for &idx in layer.iter() {
            if let LayerNode::Task(id) = layered.node(idx) {
                index.insert(id.clone(), nodes.len());
                nodes.push(PositionedNode {
                    id: id.clone(),
                    level: rank,
                    order,
                    rect: placement.boxes[idx],
                });
                order += 1;
            }
        }
    }

    let mut edges = Vec::with_capacity(graph.edge_count());
    for (edge_idx, edge) in graph.edges().iter().enumerate() {
        let (Some(&from), Some(&to)) = (index.get(&edge.source), index.get(&edge.target)) else {
            debug!(edge = %edge.id, "edge endpoint has no position; skipping");
            continue;
        };
        let source: &PositionedNode = &nodes[from];
        let target: &PositionedNode = &nodes[to];

        let mut points = Vec::with_capacity(2 + layered.bends(edge_idx).len());
        points.push(source.rect.out_anchor(config.orientation));
        points.extend(layered.bends(edge_idx).iter().map(|&b| placement.bend_point(b)));
        points.push(target.rect.in_anchor(config.orientation));

        edges.push(RoutedEdge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            path: routing::curve_path(config.orientation, &points),
            points,
            forward: target.level > source.level,
        });
    }

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        ranks = layered.layers().len(),
        dummies = layered.dummy_count(),
        crossings,
        "layout computed"
    );

    Layout {
        nodes,
        edges,
        width: placement.width,
        height: placement.height,
        crossings,
        index,
    }
}
