// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{BoardFile, RawBoardFile};
use crate::errors::Result;

/// Load a board snapshot file and return the raw `RawBoardFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawBoardFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}

/// Parse a board snapshot from an in-memory TOML string.
pub fn load_from_str(contents: &str) -> Result<RawBoardFile> {
    let raw: RawBoardFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a board snapshot file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - at least one column,
///   - duplicate column / task / dependency ids,
///   - tasks placed in unknown columns,
///   - layout sizes that cannot produce a drawing.
///
/// Dependency rows are deliberately *not* checked for dangling endpoints;
/// the graph model filters those out.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BoardFile> {
    let raw = load_from_path(&path)?;
    let file = BoardFile::try_from(raw)?;
    Ok(file)
}

/// Default snapshot path: `TaskLink.toml` in the current working directory.
pub fn default_board_path() -> PathBuf {
    PathBuf::from("TaskLink.toml")
}
