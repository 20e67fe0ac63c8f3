// src/config/validate.rs

use std::collections::HashSet;

use tracing::debug;

use crate::config::model::{BoardFile, BoardRows, DependencyRow, LayoutSection, RawBoardFile};
use crate::errors::{Result, TaskLinkError};

impl TryFrom<RawBoardFile> for BoardFile {
    type Error = crate::errors::TaskLinkError;

    fn try_from(raw: RawBoardFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_board(&raw)?;

        let dependencies = fill_dependency_ids(raw.dependency);

        let rows = BoardRows {
            columns: raw.column,
            tasks: raw.task,
            dependencies,
        };

        Ok(BoardFile::new_unchecked(raw.board, raw.layout, rows))
    }
}

fn validate_raw_board(raw: &RawBoardFile) -> Result<()> {
    ensure_has_columns(raw)?;
    validate_layout(&raw.layout)?;
    validate_columns(raw)?;
    validate_tasks(raw)?;
    validate_dependencies(raw)?;
    Ok(())
}

fn ensure_has_columns(raw: &RawBoardFile) -> Result<()> {
    if raw.column.is_empty() {
        return Err(TaskLinkError::ConfigError(
            "board must contain at least one [[column]] entry".to_string(),
        ));
    }
    Ok(())
}

/// Layout values must describe a drawable diagram.
pub fn validate_layout(layout: &LayoutSection) -> Result<()> {
    let sizes = [
        ("node_width", layout.node_width),
        ("node_height", layout.node_height),
    ];
    for (name, value) in sizes {
        if !value.is_finite() || value <= 0.0 {
            return Err(TaskLinkError::ConfigError(format!(
                "[layout].{name} must be > 0 (got {value})"
            )));
        }
    }

    let gaps = [
        ("node_separation", layout.node_separation),
        ("rank_separation", layout.rank_separation),
    ];
    for (name, value) in gaps {
        if !value.is_finite() || value < 0.0 {
            return Err(TaskLinkError::ConfigError(format!(
                "[layout].{name} must be >= 0 (got {value})"
            )));
        }
    }

    if layout.crossing_sweeps == 0 {
        return Err(TaskLinkError::ConfigError(
            "[layout].crossing_sweeps must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_columns(raw: &RawBoardFile) -> Result<()> {
    let mut seen = HashSet::new();
    for column in raw.column.iter() {
        if !seen.insert(column.id.as_str()) {
            return Err(TaskLinkError::ConfigError(format!(
                "duplicate column id '{}'",
                column.id
            )));
        }
    }
    Ok(())
}

fn validate_tasks(raw: &RawBoardFile) -> Result<()> {
    let columns: HashSet<&str> = raw.column.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::new();

    for task in raw.task.iter() {
        if !seen.insert(task.id.as_str()) {
            return Err(TaskLinkError::ConfigError(format!(
                "duplicate task id '{}'",
                task.id
            )));
        }
        if !columns.contains(task.column_id.as_str()) {
            return Err(TaskLinkError::ConfigError(format!(
                "task '{}' is placed in unknown column '{}'",
                task.id, task.column_id
            )));
        }
    }
    Ok(())
}

/// Explicit dependency ids must be unique. Rows without an id get one later.
fn validate_dependencies(raw: &RawBoardFile) -> Result<()> {
    let mut seen = HashSet::new();
    for dep in raw.dependency.iter() {
        let id = dep.id.trim();
        if id.is_empty() {
            continue;
        }
        if !seen.insert(id) {
            return Err(TaskLinkError::ConfigError(format!(
                "duplicate dependency id '{id}'"
            )));
        }
    }
    Ok(())
}

fn fill_dependency_ids(rows: Vec<DependencyRow>) -> Vec<DependencyRow> {
    let mut taken: HashSet<String> = rows
        .iter()
        .filter(|d| !d.id.trim().is_empty())
        .map(|d| d.id.clone())
        .collect();

    rows.into_iter()
        .map(|mut row| {
            if row.id.trim().is_empty() {
                row.id = DependencyRow::unused_id(&row.task_id, &row.depends_on_task_id, |id| {
                    taken.contains(id)
                });
                taken.insert(row.id.clone());
                debug!(
                    edge = %row.id,
                    "dependency row without id; derived one from its endpoints"
                );
            }
            row
        })
        .collect()
}
