// src/board/mod.rs

//! Board data: the nested view, the adapter that builds it from persisted
//! rows, and the versioned snapshot that owns both.

pub mod adapter;
pub mod fingerprint;
pub mod snapshot;
pub mod view;

pub use adapter::build_board;
pub use fingerprint::compute_fingerprint;
pub use snapshot::BoardSnapshot;
pub use view::{Board, Column, Task, done_title_key};
