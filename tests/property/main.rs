// tests/property/main.rs

use std::collections::HashSet;

use proptest::prelude::*;
use tasklink::config::DependencyRow;
use tasklink::graph::{BlockingState, DependencyGraph};
use tasklink::layout::{LayoutConfig, LayeredGraph, LevelBuckets, compute_layout};
use tasklink::types::Orientation;

fn task_name(i: usize) -> String {
    format!("task_{i}")
}

/// A random DAG: task `i` may only depend on tasks `0..i`.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = DependencyGraph> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..4), num_tasks)
            .prop_map(move |raw_deps| {
                let mut rows = Vec::new();
                for (i, potential) in raw_deps.into_iter().enumerate() {
                    if i == 0 {
                        continue;
                    }
                    for dep in potential {
                        let (t, d) = (task_name(i), task_name(dep % i));
                        rows.push(DependencyRow::new(DependencyRow::derived_id(&t, &d), t, d));
                    }
                }
                DependencyGraph::new((0..num_tasks).map(task_name), &rows)
            })
    })
}

/// Any directed graph, cycles and self-loops included.
fn any_graph_strategy(max_tasks: usize) -> impl Strategy<Value = DependencyGraph> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec((0..num_tasks, 0..num_tasks), 0..num_tasks * 3).prop_map(
            move |pairs| {
                let rows: Vec<DependencyRow> = pairs
                    .into_iter()
                    .map(|(t, d)| {
                        let (t, d) = (task_name(t), task_name(d));
                        DependencyRow::new(DependencyRow::derived_id(&t, &d), t, d)
                    })
                    .collect();
                DependencyGraph::new((0..num_tasks).map(task_name), &rows)
            },
        )
    })
}

fn done_subset(graph: &DependencyGraph, mask: &[bool]) -> HashSet<String> {
    graph
        .tasks()
        .zip(mask.iter().cycle())
        .filter(|(_, done)| **done)
        .map(|(t, _)| t.to_string())
        .collect()
}

proptest! {
    #[test]
    fn levels_follow_the_longest_prerequisite_chain(graph in dag_strategy(12)) {
        let levels = graph.levels();
        prop_assert!(!levels.has_cycles());
        for task in graph.tasks() {
            let deps = graph.dependencies_of(task);
            let expected = deps.iter().map(|d| levels.get(d) + 1).max().unwrap_or(0);
            prop_assert_eq!(levels.get(task), expected);
        }
    }

    #[test]
    fn blocked_by_is_the_unfinished_prerequisites(
        graph in dag_strategy(12),
        mask in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let done = done_subset(&graph, &mask);
        let blocking = BlockingState::derive(&graph, &done);

        for task in graph.tasks() {
            let deps = graph.dependencies_of(task);
            let blocked_by = blocking.blocked_by(task).unwrap_or(&[]);
            prop_assert!(blocked_by.iter().all(|b| deps.contains(b) && !done.contains(b)));
            let all_done = deps.iter().all(|d| done.contains(d));
            prop_assert_eq!(blocked_by.is_empty(), all_done);
        }
        prop_assert_eq!(BlockingState::derive(&graph, &done), blocking);
    }

    #[test]
    fn levels_terminate_on_any_graph(graph in any_graph_strategy(10)) {
        let levels = graph.levels();
        prop_assert_eq!(levels.len(), graph.task_count());
        for task in graph.tasks() {
            // A back edge adds one, so a loop through every task reaches the task count.
            prop_assert!(levels.get(task) <= graph.task_count());
        }
    }

    #[test]
    fn layout_nodes_are_finite_and_never_overlap(
        graph in any_graph_strategy(10),
        top_to_bottom in any::<bool>(),
    ) {
        let config = LayoutConfig {
            orientation: if top_to_bottom {
                Orientation::TopToBottom
            } else {
                Orientation::LeftToRight
            },
            ..LayoutConfig::default()
        };
        let layout = compute_layout(&graph, &graph.levels(), &config);
        prop_assert_eq!(layout.nodes.len(), graph.task_count());

        for node in &layout.nodes {
            let r = node.rect;
            prop_assert!(r.x.is_finite() && r.y.is_finite());
            prop_assert!(r.x >= 0.0 && r.y >= 0.0);
            prop_assert!(r.x + r.width <= layout.width + 0.01);
            prop_assert!(r.y + r.height <= layout.height + 0.01);
        }

        for (i, a) in layout.nodes.iter().enumerate() {
            for b in layout.nodes[i + 1..].iter().filter(|b| b.level == a.level) {
                let (ra, rb) = (a.rect, b.rect);
                let overlap = ra.x < rb.x + rb.width
                    && rb.x < ra.x + ra.width
                    && ra.y < rb.y + rb.height
                    && rb.y < ra.y + ra.height;
                prop_assert!(!overlap, "{} overlaps {}", a.id, b.id);
            }
        }

        for edge in &layout.edges {
            prop_assert!(edge.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn crossing_reduction_never_makes_things_worse(graph in dag_strategy(12), sweeps in 1usize..6) {
        let levels = graph.levels();
        let buckets = LevelBuckets::new(&graph, &levels);
        let mut layered = LayeredGraph::build(&graph, &levels, &buckets);
        let initial = layered.crossings();

        let best = layered.minimize_crossings(sweeps);
        prop_assert!(best <= initial);
        prop_assert_eq!(best, layered.crossings());
    }
}
