// src/layout/config.rs

use crate::config::LayoutSection;
use crate::types::Orientation;

/// Layout configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Direction ranks advance in.
    pub orientation: Orientation,
    /// Width of a task node
    pub node_width: f32,
    /// Height of a task node
    pub node_height: f32,
    /// Gap between neighbouring nodes inside one rank
    pub node_separation: f32,
    /// Gap between consecutive ranks
    pub rank_separation: f32,
    /// Down+up barycenter sweeps for crossing reduction
    pub crossing_sweeps: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::from(&LayoutSection::default())
    }
}

impl From<&LayoutSection> for LayoutConfig {
    fn from(section: &LayoutSection) -> Self {
        Self {
            orientation: section.orientation,
            node_width: section.node_width,
            node_height: section.node_height,
            node_separation: section.node_separation,
            rank_separation: section.rank_separation,
            crossing_sweeps: section.crossing_sweeps,
        }
    }
}

impl LayoutConfig {
    /// Node size along the axis ranks advance in.
    pub fn main_extent(&self) -> f32 {
        match self.orientation {
            Orientation::LeftToRight => self.node_width,
            Orientation::TopToBottom => self.node_height,
        }
    }

    /// Node size across a rank.
    pub fn cross_extent(&self) -> f32 {
        match self.orientation {
            Orientation::LeftToRight => self.node_height,
            Orientation::TopToBottom => self.node_width,
        }
    }

    /// Main-axis offset of the start of `rank`.
    pub fn rank_offset(&self, rank: usize) -> f32 {
        rank as f32 * (self.main_extent() + self.rank_separation)
    }
}
