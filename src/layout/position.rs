// src/layout/position.rs

//! Coordinate assignment for an ordered [`LayeredGraph`].
//!
//! Ranks are spaced evenly along the main axis. Inside a rank, items are
//! packed in order with `node_separation` between them and the whole rank is
//! centred against the widest rank. Dummy nodes take no space of their own.

use crate::layout::config::LayoutConfig;
use crate::layout::ordering::{LayerNode, LayeredGraph};
use crate::layout::routing::{Point, Rect};
use crate::types::Orientation;

/// Coordinates of every layered node.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Node box for task nodes; a zero-sized box at the bend point for dummies.
    pub boxes: Vec<Rect>,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    /// Bend point of a dummy node.
    pub fn bend_point(&self, idx: usize) -> Point {
        let rect = self.boxes[idx];
        Point::new(rect.x, rect.y)
    }
}

pub fn assign_coordinates(layered: &LayeredGraph, config: &LayoutConfig) -> Placement {
    let item_extent = |idx: usize| match layered.node(idx) {
        LayerNode::Task(_) => config.cross_extent(),
        LayerNode::Dummy { .. } => 0.0,
    };

    let layer_extent = |layer: &[usize]| -> f32 {
        let items: f32 = layer.iter().map(|&i| item_extent(i)).sum();
        let gaps = layer.len().saturating_sub(1) as f32 * config.node_separation;
        items + gaps
    };

    let max_extent = layered
        .layers()
        .iter()
        .map(|l| layer_extent(l.as_slice()))
        .fold(0.0_f32, f32::max);

    let node_count = layered.layers().iter().map(|l| l.len()).sum::<usize>();
    let mut boxes = vec![
        Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
        node_count
    ];

    for (rank, layer) in layered.layers().iter().enumerate() {
        let main = config.rank_offset(rank);
        let mut cursor = (max_extent - layer_extent(layer.as_slice())) / 2.0;

        for &idx in layer.iter() {
            boxes[idx] = match layered.node(idx) {
                LayerNode::Task(_) => task_box(config, main, cursor),
                LayerNode::Dummy { .. } => {
                    let bend_main = main + config.main_extent() / 2.0;
                    let (x, y) = match config.orientation {
                        Orientation::LeftToRight => (bend_main, cursor),
                        Orientation::TopToBottom => (cursor, bend_main),
                    };
                    Rect {
                        x,
                        y,
                        width: 0.0,
                        height: 0.0,
                    }
                }
            };
            cursor += item_extent(idx) + config.node_separation;
        }
    }

    let ranks = layered.layers().len();
    let main_total = if ranks == 0 {
        0.0
    } else {
        config.rank_offset(ranks - 1) + config.main_extent()
    };
    let (width, height) = match config.orientation {
        Orientation::LeftToRight => (main_total, max_extent),
        Orientation::TopToBottom => (max_extent, main_total),
    };

    Placement {
        boxes,
        width,
        height,
    }
}

fn task_box(config: &LayoutConfig, main: f32, cross: f32) -> Rect {
    let (x, y) = match config.orientation {
        Orientation::LeftToRight => (main, cross),
        Orientation::TopToBottom => (cross, main),
    };
    Rect {
        x,
        y,
        width: config.node_width,
        height: config.node_height,
    }
}
