// src/board/adapter.rs

//! Flat persisted rows -> nested [`Board`].

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::board::view::{Board, Column, Task};
use crate::config::{BoardRows, BoardSection, TaskRow};
use crate::types::TaskId;

/// Build the nested board view from one board's rows.
///
/// - Columns are ordered by `position`; tasks by `position` within their
///   column. Both sorts are stable, so ties keep row order.
/// - Each task's `depends_on` lists the prerequisites of its dependency rows
///   in row order. Dangling prerequisites are kept here; the graph drops them.
/// - Tasks placed in a column that is not part of the board are left out.
/// - Only dependency rows whose dependent task is on the board are kept in
///   [`Board::edges`].
pub fn build_board(section: &BoardSection, rows: &BoardRows) -> Board {
    let mut columns: Vec<Column> = rows
        .columns
        .iter()
        .map(|c| Column {
            id: c.id.clone(),
            title: c.title.clone(),
            position: c.position,
            tasks: Vec::new(),
        })
        .collect();
    columns.sort_by_key(|c| c.position);

    let column_index: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i))
        .collect();

    let mut depends_on: HashMap<&str, Vec<TaskId>> = HashMap::new();
    for dep in rows.dependencies.iter() {
        depends_on
            .entry(dep.task_id.as_str())
            .or_default()
            .push(dep.depends_on_task_id.clone());
    }

    let mut placed: Vec<(usize, Task)> = Vec::with_capacity(rows.tasks.len());
    for row in rows.tasks.iter() {
        match column_index.get(row.column_id.as_str()) {
            Some(&idx) => {
                let deps = depends_on.get(row.id.as_str()).cloned().unwrap_or_default();
                placed.push((idx, task_from_row(row, deps)));
            }
            None => {
                warn!(
                    task = %row.id,
                    column = %row.column_id,
                    "task references a column outside this board; leaving it out"
                );
            }
        }
    }

    for (idx, task) in placed {
        columns[idx].tasks.push(task);
    }
    for column in columns.iter_mut() {
        column.tasks.sort_by_key(|t| t.position);
    }

    let on_board: HashSet<&str> = columns
        .iter()
        .flat_map(|c| c.tasks.iter().map(|t| t.id.as_str()))
        .collect();
    let edges = rows
        .dependencies
        .iter()
        .filter(|d| on_board.contains(d.task_id.as_str()))
        .cloned()
        .collect();

    let board = Board {
        id: section.id.clone(),
        name: section.name.clone(),
        columns,
        edges,
    };

    debug!(
        board = %board.id,
        columns = board.columns.len(),
        tasks = board.task_count(),
        edges = board.edges.len(),
        "adapted board rows"
    );

    board
}

fn task_from_row(row: &TaskRow, depends_on: Vec<TaskId>) -> Task {
    Task {
        id: row.id.clone(),
        column_id: row.column_id.clone(),
        title: row.title.clone(),
        description: row.description.clone(),
        assignee_name: row.assignee_name.clone(),
        assignee_id: row.assignee_id.clone(),
        due_date: row.due_date.clone(),
        category: row.category,
        position: row.position,
        depends_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnRow, DependencyRow};
    use crate::types::Category;

    fn column(id: &str, title: &str, position: i64) -> ColumnRow {
        ColumnRow {
            id: id.to_string(),
            title: title.to_string(),
            position,
        }
    }

    fn task(id: &str, column_id: &str, position: i64) -> TaskRow {
        TaskRow {
            id: id.to_string(),
            column_id: column_id.to_string(),
            title: id.to_uppercase(),
            description: None,
            assignee_name: None,
            assignee_id: None,
            due_date: None,
            category: Category::Code,
            position,
        }
    }

    #[test]
    fn sorts_columns_and_tasks_by_position() {
        let rows = BoardRows {
            columns: vec![column("done", "Done", 2), column("todo", "To Do", 0)],
            tasks: vec![task("b", "todo", 1), task("a", "todo", 0), task("c", "done", 0)],
            dependencies: vec![],
        };
        let board = build_board(&BoardSection::default(), &rows);

        let ids: Vec<&str> = board.tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(board.columns[0].id, "todo");
    }

    #[test]
    fn populates_depends_on_from_edges() {
        let rows = BoardRows {
            columns: vec![column("todo", "To Do", 0)],
            tasks: vec![task("a", "todo", 0), task("b", "todo", 1)],
            dependencies: vec![
                DependencyRow::new("e1", "b", "a"),
                DependencyRow::new("e2", "b", "ghost"),
                DependencyRow::new("e3", "ghost", "a"),
            ],
        };
        let board = build_board(&BoardSection::default(), &rows);

        assert_eq!(
            board.task("b").map(|t| t.depends_on.clone()),
            Some(vec!["a".to_string(), "ghost".to_string()])
        );
        assert_eq!(board.edges.len(), 2);
    }

    #[test]
    fn drops_tasks_in_unknown_columns() {
        let rows = BoardRows {
            columns: vec![column("todo", "To Do", 0)],
            tasks: vec![task("a", "todo", 0), task("b", "elsewhere", 0)],
            dependencies: vec![],
        };
        let board = build_board(&BoardSection::default(), &rows);
        assert_eq!(board.task_count(), 1);
        assert!(board.task("b").is_none());
    }
}
