// src/layout/buckets.rs

use crate::graph::{DependencyGraph, LevelMap};
use crate::types::TaskId;

/// Tasks grouped by level: bucket `i` holds every task of level `i`, in graph
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelBuckets {
    buckets: Vec<Vec<TaskId>>,
}

impl LevelBuckets {
    pub fn new(graph: &DependencyGraph, levels: &LevelMap) -> Self {
        let mut buckets: Vec<Vec<TaskId>> = Vec::new();

        for task in graph.tasks() {
            let level = levels.get(task);
            if buckets.len() <= level {
                buckets.resize_with(level + 1, Vec::new);
            }
            buckets[level].push(task.to_string());
        }

        Self { buckets }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket(&self, level: usize) -> &[TaskId] {
        self.buckets
            .get(level)
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[TaskId]> {
        self.buckets.iter().map(|b| b.as_slice())
    }

    /// Lane caption used by the flow view.
    pub fn label(level: usize) -> String {
        if level == 0 {
            "Independent".to_string()
        } else {
            format!("Level {level}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DependencyRow;

    #[test]
    fn independent_tasks_share_bucket_zero() {
        let graph = DependencyGraph::new(["a", "b"], &[]);
        let buckets = LevelBuckets::new(&graph, &graph.levels());

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.bucket(0), ["a", "b"]);
    }

    #[test]
    fn buckets_follow_levels() {
        let graph = DependencyGraph::new(
            ["c", "a", "b"],
            &[DependencyRow::new("e1", "c", "b"), DependencyRow::new("e2", "b", "a")],
        );
        let buckets = LevelBuckets::new(&graph, &graph.levels());

        assert_eq!(buckets.bucket(0), ["a"]);
        assert_eq!(buckets.bucket(1), ["b"]);
        assert_eq!(buckets.bucket(2), ["c"]);
        assert!(buckets.bucket(3).is_empty());
        assert_eq!(LevelBuckets::label(2), "Level 2");
    }
}
