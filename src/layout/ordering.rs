// src/layout/ordering.rs

//! Layered graph construction and crossing reduction.
//!
//! Ranks come straight from the task levels. Every forward edge spanning more
//! than one rank is split with one dummy node per intermediate rank, so the
//! crossing count and the barycenter heuristic see long edges too. Edges that
//! do not point to a higher rank only exist in cyclic graphs; they are left
//! out of the layered graph and routed directly.

use std::cmp::Ordering;

use tracing::debug;

use crate::graph::{DependencyGraph, LevelMap};
use crate::layout::buckets::LevelBuckets;
use crate::types::TaskId;

/// Item placed in a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerNode {
    Task(TaskId),
    /// Bend point of the graph edge at this index.
    Dummy { edge: usize },
}

#[derive(Debug, Clone, Copy)]
enum Sweep {
    /// Order a rank by its neighbours in the rank above.
    Down,
    /// Order a rank by its neighbours in the rank below.
    Up,
}

#[derive(Debug, Clone)]
pub struct LayeredGraph {
    nodes: Vec<LayerNode>,
    /// Node indices per rank, in current order.
    layers: Vec<Vec<usize>>,
    rank_of: Vec<usize>,
    upper: Vec<Vec<usize>>,
    lower: Vec<Vec<usize>>,
    /// For each graph edge: node indices from source to target, or `None`
    /// for non-forward edges.
    chains: Vec<Option<Vec<usize>>>,
}

impl LayeredGraph {
    pub fn build(graph: &DependencyGraph, levels: &LevelMap, buckets: &LevelBuckets) -> Self {
        let mut layered = Self {
            nodes: Vec::new(),
            layers: vec![Vec::new(); buckets.len()],
            rank_of: Vec::new(),
            upper: Vec::new(),
            lower: Vec::new(),
            chains: Vec::with_capacity(graph.edge_count()),
        };

        let mut task_node = std::collections::HashMap::new();
        for (rank, bucket) in buckets.iter().enumerate() {
            for task in bucket {
                let idx = layered.push_node(LayerNode::Task(task.clone()), rank);
                task_node.insert(task.as_str(), idx);
            }
        }

        for (edge_idx, edge) in graph.edges().iter().enumerate() {
            let from_rank = levels.get(&edge.source);
            let to_rank = levels.get(&edge.target);
            let (Some(&from), Some(&to)) = (
                task_node.get(edge.source.as_str()),
                task_node.get(edge.target.as_str()),
            ) else {
                layered.chains.push(None);
                continue;
            };

            if to_rank <= from_rank {
                debug!(
                    edge = %edge.id,
                    from_rank,
                    to_rank,
                    "non-forward edge; routed outside the layering"
                );
                layered.chains.push(None);
                continue;
            }

            let mut chain = Vec::with_capacity(to_rank - from_rank + 1);
            chain.push(from);
            for rank in (from_rank + 1)..to_rank {
                chain.push(layered.push_node(LayerNode::Dummy { edge: edge_idx }, rank));
            }
            chain.push(to);

            for pair in chain.windows(2) {
                layered.lower[pair[0]].push(pair[1]);
                layered.upper[pair[1]].push(pair[0]);
            }
            layered.chains.push(Some(chain));
        }

        layered
    }

    fn push_node(&mut self, node: LayerNode, rank: usize) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.rank_of.push(rank);
        self.upper.push(Vec::new());
        self.lower.push(Vec::new());
        self.layers[rank].push(idx);
        idx
    }

    pub fn node(&self, idx: usize) -> &LayerNode {
        &self.nodes[idx]
    }

    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    pub fn rank_of(&self, idx: usize) -> usize {
        self.rank_of[idx]
    }

    /// Dummy node indices of the graph edge at `edge`, source to target.
    /// Empty for short and non-forward edges.
    pub fn bends(&self, edge: usize) -> &[usize] {
        match self.chains.get(edge) {
            Some(Some(chain)) if chain.len() > 2 => &chain[1..chain.len() - 1],
            _ => &[],
        }
    }

    pub fn dummy_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, LayerNode::Dummy { .. }))
            .count()
    }

    fn positions(&self) -> Vec<usize> {
        let mut pos = vec![0; self.nodes.len()];
        for layer in self.layers.iter() {
            for (i, &node) in layer.iter().enumerate() {
                pos[node] = i;
            }
        }
        pos
    }

    /// Total number of segment crossings between adjacent ranks.
    pub fn crossings(&self) -> usize {
        let pos = self.positions();
        let mut total = 0;

        for layer in self.layers.iter() {
            let segments: Vec<(usize, usize)> = layer
                .iter()
                .flat_map(|&u| self.lower[u].iter().map(move |&v| (u, v)))
                .map(|(u, v)| (pos[u], pos[v]))
                .collect();

            for (i, a) in segments.iter().enumerate() {
                for b in segments[i + 1..].iter() {
                    if (a.0 < b.0 && a.1 > b.1) || (a.0 > b.0 && a.1 < b.1) {
                        total += 1;
                    }
                }
            }
        }

        total
    }

    /// Reduce crossings with alternating barycenter sweeps and keep the best
    /// ordering seen (the initial one included). Returns its crossing count.
    pub fn minimize_crossings(&mut self, sweeps: usize) -> usize {
        let mut best = self.crossings();
        let mut best_layers = self.layers.clone();
        let ranks = self.layers.len();

        for sweep in 0..sweeps {
            if best == 0 {
                break;
            }

            for rank in 1..ranks {
                self.reorder(rank, Sweep::Down);
            }
            for rank in (0..ranks.saturating_sub(1)).rev() {
                self.reorder(rank, Sweep::Up);
            }

            let crossings = self.crossings();
            debug!(sweep, crossings, best, "barycenter sweep");
            if crossings < best {
                best = crossings;
                best_layers = self.layers.clone();
            }
        }

        self.layers = best_layers;
        best
    }

    fn reorder(&mut self, rank: usize, sweep: Sweep) {
        let pos = self.positions();

        let mut keyed: Vec<(f32, usize)> = self.layers[rank]
            .iter()
            .enumerate()
            .map(|(i, &node)| {
                let neighbours = match sweep {
                    Sweep::Down => &self.upper[node],
                    Sweep::Up => &self.lower[node],
                };
                let key = if neighbours.is_empty() {
                    i as f32
                } else {
                    let sum: usize = neighbours.iter().map(|&n| pos[n]).sum();
                    sum as f32 / neighbours.len() as f32
                };
                (key, node)
            })
            .collect();

        // Stable: ties keep their current relative order.
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        self.layers[rank] = keyed.into_iter().map(|(_, node)| node).collect();
    }
}
