#![allow(dead_code)]

use tasklink::board::BoardSnapshot;
use tasklink::config::{
    BoardFile, BoardRows, BoardSection, ColumnRow, DependencyRow, LayoutSection, RawBoardFile,
    TaskRow,
};
use tasklink::types::{Category, Orientation};

/// Builder for board rows, snapshots and validated files.
pub struct BoardBuilder {
    section: BoardSection,
    layout: LayoutSection,
    rows: BoardRows,
}

impl BoardBuilder {
    /// An empty board without columns.
    pub fn new() -> Self {
        Self {
            section: BoardSection::default(),
            layout: LayoutSection::default(),
            rows: BoardRows::default(),
        }
    }

    /// A board with the usual `todo`, `doing` and `done` columns.
    pub fn kanban() -> Self {
        Self::new()
            .column("todo", "To Do")
            .column("doing", "In Progress")
            .column("done", "Done")
    }

    pub fn name(mut self, name: &str) -> Self {
        self.section.name = name.to_string();
        self
    }

    pub fn done_column_title(mut self, title: &str) -> Self {
        self.section.done_column_title = title.to_string();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.layout.orientation = orientation;
        self
    }

    /// Append a column after the existing ones.
    pub fn column(mut self, id: &str, title: &str) -> Self {
        let position = self.rows.columns.len() as i64;
        self.rows.columns.push(ColumnRow {
            id: id.to_string(),
            title: title.to_string(),
            position,
        });
        self
    }

    /// Append a task with default fields to the end of `column`.
    pub fn task_in(self, id: &str, column: &str) -> Self {
        let position = self
            .rows
            .tasks
            .iter()
            .filter(|t| t.column_id == column)
            .count() as i64;
        self.task(TaskRowBuilder::new(id, column).position(position).build())
    }

    pub fn task(mut self, task: TaskRow) -> Self {
        self.rows.tasks.push(task);
        self
    }

    /// `task` depends on `depends_on`.
    pub fn depends(mut self, task: &str, depends_on: &str) -> Self {
        self.rows.dependencies.push(DependencyRow::new(
            DependencyRow::derived_id(task, depends_on),
            task,
            depends_on,
        ));
        self
    }

    pub fn rows(&self) -> BoardRows {
        self.rows.clone()
    }

    pub fn snapshot(self) -> BoardSnapshot {
        BoardSnapshot::new(self.section, self.rows)
    }

    pub fn build(self) -> BoardFile {
        let raw = RawBoardFile {
            board: self.section,
            layout: self.layout,
            column: self.rows.columns,
            task: self.rows.tasks,
            dependency: self.rows.dependencies,
        };
        BoardFile::try_from(raw).expect("Failed to build valid board from builder")
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskRow`.
pub struct TaskRowBuilder {
    task: TaskRow,
}

impl TaskRowBuilder {
    pub fn new(id: &str, column: &str) -> Self {
        Self {
            task: TaskRow {
                id: id.to_string(),
                column_id: column.to_string(),
                title: id.to_string(),
                description: None,
                assignee_name: None,
                assignee_id: None,
                due_date: None,
                category: Category::default(),
                position: 0,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.task.category = category;
        self
    }

    pub fn assignee(mut self, name: &str) -> Self {
        self.task.assignee_name = Some(name.to_string());
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.task.due_date = Some(date.to_string());
        self
    }

    pub fn position(mut self, position: i64) -> Self {
        self.task.position = position;
        self
    }

    pub fn build(self) -> TaskRow {
        self.task
    }
}
