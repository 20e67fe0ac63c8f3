// src/config/mod.rs

//! Board snapshot file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the flat persisted rows (`model.rs`).
//! - Load a snapshot file from disk (`loader.rs`).
//! - Validate basic invariants like unique ids and sane layout values
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_board_path, load_and_validate, load_from_path, load_from_str};
pub use model::{
    BoardFile, BoardRows, BoardSection, ColumnRow, DependencyRow, LayoutSection, RawBoardFile,
    TaskRow,
};
pub use validate::validate_layout;
