// src/engine/sink.rs

//! Pluggable view output.
//!
//! The runtime hands every freshly derived view to a `ViewSink` instead of
//! writing files itself. Production code uses
//! [`crate::render::OutputSink`]; tests can record the updates instead.

use std::future::Future;
use std::pin::Pin;

use crate::board::BoardSnapshot;
use crate::errors::Result;
use crate::types::TaskId;

use super::core::Derived;

/// One published view: the snapshot plus everything derived from it.
#[derive(Debug, Clone)]
pub struct ViewUpdate {
    pub snapshot: BoardSnapshot,
    pub derived: Derived,
    /// Tasks unblocked by the step that produced this view.
    pub unblocked: Vec<TaskId>,
}

/// Trait abstracting where derived views go.
pub trait ViewSink: Send {
    fn publish(
        &mut self,
        update: ViewUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}
