// src/config/model.rs

use serde::Deserialize;

use crate::types::{Category, ColumnId, Orientation, TaskId};

/// Board snapshot file exactly as read from TOML, before validation.
///
/// The tables mirror the persisted rows of a single board:
///
/// ```toml
/// [board]
/// id = "alpha"
/// name = "Project Alpha"
///
/// [layout]
/// orientation = "left-to-right"
/// rank_separation = 64
///
/// [[column]]
/// id = "todo"
/// title = "To Do"
/// position = 0
///
/// [[task]]
/// id = "task-1"
/// column_id = "todo"
/// title = "Design UI"
/// category = "design"
///
/// [[dependency]]
/// task_id = "task-1"
/// depends_on_task_id = "task-4"
/// ```
///
/// All sections are optional at the TOML level; [`BoardFile`] is the validated
/// form the rest of the crate works with.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoardFile {
    #[serde(default)]
    pub board: BoardSection,

    #[serde(default)]
    pub layout: LayoutSection,

    /// `[[column]]` rows.
    #[serde(default)]
    pub column: Vec<ColumnRow>,

    /// `[[task]]` rows.
    #[serde(default)]
    pub task: Vec<TaskRow>,

    /// `[[dependency]]` rows. Edges may reference tasks that no longer exist.
    #[serde(default)]
    pub dependency: Vec<DependencyRow>,
}

/// Validated board snapshot file.
///
/// Can only be built through `TryFrom<RawBoardFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct BoardFile {
    pub board: BoardSection,
    pub layout: LayoutSection,
    pub rows: BoardRows,
}

impl BoardFile {
    pub(crate) fn new_unchecked(
        board: BoardSection,
        layout: LayoutSection,
        rows: BoardRows,
    ) -> Self {
        Self {
            board,
            layout,
            rows,
        }
    }
}

/// `[board]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSection {
    #[serde(default = "default_board_id")]
    pub id: String,

    #[serde(default = "default_board_name")]
    pub name: String,

    /// Column title that marks a task as finished. Compared case-insensitively.
    #[serde(default = "default_done_column_title")]
    pub done_column_title: String,
}

fn default_board_id() -> String {
    "board".to_string()
}

fn default_board_name() -> String {
    "My First Board".to_string()
}

fn default_done_column_title() -> String {
    "Done".to_string()
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            id: default_board_id(),
            name: default_board_name(),
            done_column_title: default_done_column_title(),
        }
    }
}

/// `[layout]` section. Sizes are in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default = "default_node_width")]
    pub node_width: f32,

    #[serde(default = "default_node_height")]
    pub node_height: f32,

    /// Gap between two neighbouring nodes of the same rank.
    #[serde(default = "default_node_separation")]
    pub node_separation: f32,

    /// Gap between two consecutive ranks.
    #[serde(default = "default_rank_separation")]
    pub rank_separation: f32,

    /// Number of down+up barycenter sweeps used for crossing reduction.
    #[serde(default = "default_crossing_sweeps")]
    pub crossing_sweeps: usize,
}

fn default_node_width() -> f32 {
    200.0
}

fn default_node_height() -> f32 {
    80.0
}

fn default_node_separation() -> f32 {
    16.0
}

fn default_rank_separation() -> f32 {
    64.0
}

fn default_crossing_sweeps() -> usize {
    8
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            node_width: default_node_width(),
            node_height: default_node_height(),
            node_separation: default_node_separation(),
            rank_separation: default_rank_separation(),
            crossing_sweeps: default_crossing_sweeps(),
        }
    }
}

/// Flat persisted rows for one board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardRows {
    pub columns: Vec<ColumnRow>,
    pub tasks: Vec<TaskRow>,
    pub dependencies: Vec<DependencyRow>,
}

/// A `columns` row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnRow {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub position: i64,
}

/// A `tasks` row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    /// ISO date as stored by the backend; not interpreted here.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, alias = "icon")]
    pub category: Category,
    #[serde(default)]
    pub position: i64,
}

/// A `task_dependencies` row: `task_id` cannot finish before
/// `depends_on_task_id`.
///
/// `id` may be omitted in the snapshot file; validation derives one from the
/// endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DependencyRow {
    #[serde(default)]
    pub id: String,
    pub task_id: TaskId,
    pub depends_on_task_id: TaskId,
}

impl DependencyRow {
    pub fn new(
        id: impl Into<String>,
        task_id: impl Into<TaskId>,
        depends_on: impl Into<TaskId>,
    ) -> Self {
        Self {
            id: id.into(),
            task_id: task_id.into(),
            depends_on_task_id: depends_on.into(),
        }
    }

    /// Identifier used when the row has none.
    pub fn derived_id(task_id: &str, depends_on: &str) -> String {
        format!("{task_id}->{depends_on}")
    }

    /// [`DependencyRow::derived_id`], suffixed with `#2`, `#3`, ... until
    /// `taken` no longer claims it.
    pub fn unused_id(task_id: &str, depends_on: &str, taken: impl Fn(&str) -> bool) -> String {
        let base = Self::derived_id(task_id, depends_on);
        let mut id = base.clone();
        let mut n = 1;
        while taken(&id) {
            n += 1;
            id = format!("{base}#{n}");
        }
        id
    }
}
