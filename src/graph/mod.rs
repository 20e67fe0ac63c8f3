// src/graph/mod.rs

//! Dependency graph model and the state derived from it.
//!
//! - [`dependency`] holds tasks and their prerequisite edges.
//! - [`levels`] assigns each task its layer in the diagram.
//! - [`blocking`] turns the graph plus the Done column into `blocked_by` lists.
//! - [`cycles`] reports dependency loops for diagnostics.

pub mod blocking;
pub mod cycles;
pub mod dependency;
pub mod levels;

pub use blocking::{BlockingEntry, BlockingState};
pub use cycles::{cyclic_groups, would_close_cycle};
pub use dependency::{DependencyEdge, DependencyGraph};
pub use levels::LevelMap;
