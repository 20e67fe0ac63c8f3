// src/render/text.rs

//! Plain-text report of the dependency flow: one section per level, then the
//! summary figures and any loops found.

use std::fmt::Write;

use crate::board::BoardSnapshot;
use crate::engine::Derived;
use crate::layout::{HoverState, LevelBuckets};

use super::flow::FlowView;

pub fn render_report(snapshot: &BoardSnapshot, derived: &Derived, hover: &HoverState) -> String {
    let view = derived.flow_view(snapshot);
    let buckets = LevelBuckets::new(&derived.graph, &derived.levels);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "tasklink: {} ({}), version {}",
        snapshot.section().name,
        snapshot.section().id,
        snapshot.version()
    );
    write_stats(&mut out, &view);
    let _ = writeln!(out);

    if view.nodes.is_empty() {
        let _ = writeln!(out, "no tasks");
        return out;
    }

    for (level, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({}):", LevelBuckets::label(level), bucket.len());
        for id in bucket {
            let Some(node) = view.node(id) else {
                continue;
            };
            let marker = if hover.is_node_highlighted(&derived.graph, id) {
                "*"
            } else {
                "-"
            };
            let column = snapshot
                .board()
                .column(&node.column_id)
                .map(|c| c.title.as_str())
                .unwrap_or("?");
            let _ = writeln!(
                out,
                "  {marker} {} [{}] ({column}, {})",
                node.task.title, node.id, node.task.category
            );
            if let Some(assignee) = node.task.assignee() {
                let _ = writeln!(out, "      assignee: {assignee}");
            }
            if let Some(ref due) = node.task.due_date {
                let _ = writeln!(out, "      due: {due}");
            }
            let deps = derived.graph.dependencies_of(id);
            if !deps.is_empty() {
                let _ = writeln!(out, "      depends on: {}", deps.join(", "));
            }
            if let Some(ref blocked_by) = node.blocked_by {
                let _ = writeln!(out, "      blocked by: {}", blocked_by.join(", "));
            }
        }
    }

    if !derived.cycles.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "cycles ({}):", derived.cycles.len());
        for group in &derived.cycles {
            let _ = writeln!(out, "  - {}", group.join(" -> "));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "layout: {:.0}x{:.0}, {} crossing(s)",
        derived.layout.width, derived.layout.height, derived.layout.crossings
    );
    out
}

fn write_stats(out: &mut String, view: &FlowView) {
    let stats = view.stats;
    let _ = writeln!(
        out,
        "  tasks: {}  dependencies: {}  blocking: {}  blocked: {}",
        stats.total_tasks, stats.dependencies, stats.blocking_tasks, stats.blocked_tasks
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardRows, BoardSection, ColumnRow, DependencyRow, TaskRow};
    use crate::layout::LayoutConfig;
    use crate::types::Category;

    fn snapshot() -> BoardSnapshot {
        let task = |id: &str, title: &str, position| TaskRow {
            id: id.to_string(),
            column_id: "todo".to_string(),
            title: title.to_string(),
            description: None,
            assignee_name: Some("Sarah".to_string()),
            assignee_id: None,
            due_date: None,
            category: Category::Design,
            position,
        };
        let rows = BoardRows {
            columns: vec![ColumnRow {
                id: "todo".into(),
                title: "To Do".into(),
                position: 0,
            }],
            tasks: vec![task("t1", "Design UI", 0), task("t4", "Backend Setup", 1)],
            dependencies: vec![DependencyRow::new("e1", "t1", "t4")],
        };
        BoardSnapshot::new(BoardSection::default(), rows)
    }

    #[test]
    fn report_lists_levels_and_blockers() {
        let snap = snapshot();
        let derived = Derived::compute(&snap, &LayoutConfig::default());
        let report = render_report(&snap, &derived, &HoverState::new());

        assert!(report.contains("Independent (1):"));
        assert!(report.contains("Level 1 (1):"));
        assert!(report.contains("- Design UI [t1] (To Do, design)"));
        assert!(report.contains("blocked by: t4"));
        assert!(report.contains("tasks: 2  dependencies: 1  blocking: 1  blocked: 1"));
        assert!(!report.contains("cycles"));
    }

    #[test]
    fn hovered_neighbourhood_is_marked() {
        let snap = snapshot();
        let derived = Derived::compute(&snap, &LayoutConfig::default());
        let mut hover = HoverState::new();
        hover.enter("t4");
        let report = render_report(&snap, &derived, &hover);

        assert!(report.contains("* Backend Setup [t4]"));
        assert!(report.contains("* Design UI [t1]"));
    }
}
