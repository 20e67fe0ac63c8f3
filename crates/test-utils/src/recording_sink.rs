use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tasklink::engine::{ViewSink, ViewUpdate};
use tasklink::errors::Result;

/// What a published view looked like, reduced to what tests assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedView {
    pub version: u64,
    pub blocked: Vec<(String, Vec<String>)>,
    pub unblocked: Vec<String>,
    pub edges: usize,
}

impl From<&ViewUpdate> for RecordedView {
    fn from(update: &ViewUpdate) -> Self {
        let blocking = &update.derived.blocking;
        Self {
            version: update.derived.version,
            blocked: blocking
                .blocked_tasks()
                .map(|t| {
                    let by = blocking.blocked_by(t).unwrap_or(&[]).to_vec();
                    (t.to_string(), by)
                })
                .collect(),
            unblocked: update.unblocked.clone(),
            edges: update.derived.graph.edge_count(),
        }
    }
}

/// A sink that records every published view instead of rendering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    views: Arc<Mutex<Vec<RecordedView>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded views; stays valid after the sink moves
    /// into a runtime.
    pub fn views(&self) -> Arc<Mutex<Vec<RecordedView>>> {
        Arc::clone(&self.views)
    }
}

impl ViewSink for RecordingSink {
    fn publish(
        &mut self,
        update: ViewUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let views = Arc::clone(&self.views);
        Box::pin(async move {
            let mut guard = views.lock().unwrap();
            guard.push(RecordedView::from(&update));
            Ok(())
        })
    }
}
