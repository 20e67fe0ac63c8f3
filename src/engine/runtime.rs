// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::types::TaskId;

use super::core::BoardEngine;
use super::sink::{ViewSink, ViewUpdate};
use super::{EngineEvent, EngineStep};

/// Drives the [`BoardEngine`] in response to [`EngineEvent`]s and publishes
/// every recomputed view to a [`ViewSink`].
///
/// All board semantics live in the core; this shell only reads the channel
/// and awaits the sink.
pub struct Runtime<S: ViewSink> {
    core: BoardEngine,
    event_rx: mpsc::Receiver<EngineEvent>,
    sink: S,
}

impl<S: ViewSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: ViewSink> Runtime<S> {
    pub fn new(core: BoardEngine, event_rx: mpsc::Receiver<EngineEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main event loop.
    ///
    /// Publishes the initial view, then one view per recomputing event until
    /// the channel closes or `Shutdown` arrives. Returns the final engine.
    pub async fn run(mut self) -> Result<BoardEngine> {
        info!(
            version = self.core.snapshot().version(),
            tasks = self.core.derived().graph.task_count(),
            "tasklink runtime started"
        );
        self.publish(Vec::new()).await?;

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let EngineStep {
                recomputed,
                unblocked,
                keep_running,
                ..
            } = self.core.step(event);

            if recomputed {
                self.publish(unblocked).await?;
            }

            if !keep_running {
                info!("shutdown requested; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.core)
    }

    async fn publish(&mut self, unblocked: Vec<TaskId>) -> Result<()> {
        let update = ViewUpdate {
            snapshot: self.core.snapshot().clone(),
            derived: self.core.derived().clone(),
            unblocked,
        };
        debug!(version = update.derived.version, "publishing view");
        self.sink.publish(update).await
    }
}
