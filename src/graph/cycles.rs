// src/graph/cycles.rs

//! Cycle diagnostics.
//!
//! Cycles are tolerated input, never an error. These helpers only exist so
//! callers can log or report them.

use petgraph::algo::{has_path_connecting, tarjan_scc};
use petgraph::graphmap::DiGraphMap;

use crate::graph::dependency::DependencyGraph;
use crate::types::TaskId;

/// Build a petgraph view of the dependency graph.
///
/// Edge direction: task -> prerequisite. For "b depends on a" we add b -> a.
fn to_graphmap(graph: &DependencyGraph) -> DiGraphMap<&str, ()> {
    let mut map: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in graph.tasks() {
        map.add_node(task);
    }
    for edge in graph.edges() {
        map.add_edge(edge.target.as_str(), edge.source.as_str(), ());
    }

    map
}

/// Groups of tasks that depend on each other in a loop.
///
/// A group has two or more members, or a single member depending on itself.
/// Members are reported in discovery order; groups are ordered by their first
/// member.
pub fn cyclic_groups(graph: &DependencyGraph) -> Vec<Vec<TaskId>> {
    let map = to_graphmap(graph);
    let position = |task: &str| graph.tasks().position(|t| t == task).unwrap_or(usize::MAX);

    let mut groups: Vec<Vec<TaskId>> = tarjan_scc(&map)
        .into_iter()
        .filter(|scc| scc.len() > 1 || map.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort_by_key(|t| position(*t));
            scc.into_iter().map(|t| t.to_string()).collect()
        })
        .collect();

    groups.sort_by_key(|g| position(g[0].as_str()));
    groups
}

/// Whether recording "`task` depends on `prerequisite`" would close a cycle,
/// i.e. `prerequisite` already (transitively) depends on `task`.
pub fn would_close_cycle(graph: &DependencyGraph, task: &str, prerequisite: &str) -> bool {
    if task == prerequisite {
        return true;
    }
    if !graph.contains(task) || !graph.contains(prerequisite) {
        return false;
    }

    let map = to_graphmap(graph);
    has_path_connecting(&map, prerequisite, task, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DependencyRow;

    fn graph(tasks: &[&str], deps: &[(&str, &str)]) -> DependencyGraph {
        let rows: Vec<DependencyRow> = deps
            .iter()
            .map(|(t, d)| DependencyRow::new(DependencyRow::derived_id(t, d), *t, *d))
            .collect();
        DependencyGraph::new(tasks.iter().copied(), &rows)
    }

    #[test]
    fn acyclic_graph_has_no_groups() {
        let g = graph(&["a", "b", "c"], &[("b", "a"), ("c", "b")]);
        assert!(cyclic_groups(&g).is_empty());
    }

    #[test]
    fn reports_cycle_members_in_discovery_order() {
        let g = graph(
            &["x", "a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("c", "a"), ("x", "a")],
        );
        assert_eq!(cyclic_groups(&g), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn self_loop_is_a_group() {
        let g = graph(&["a", "b"], &[("a", "a")]);
        assert_eq!(cyclic_groups(&g), vec![vec!["a"]]);
    }

    #[test]
    fn detects_edges_that_would_close_a_cycle() {
        let g = graph(&["a", "b", "c"], &[("b", "a"), ("c", "b")]);

        assert!(would_close_cycle(&g, "a", "c"));
        assert!(would_close_cycle(&g, "a", "a"));
        assert!(!would_close_cycle(&g, "c", "a"));
        assert!(!would_close_cycle(&g, "a", "ghost"));
    }
}
