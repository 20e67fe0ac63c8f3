// tests/runtime_recording_sink.rs

mod common;
use crate::common::builders::BoardBuilder;
use crate::common::init_tracing;
use crate::common::recording_sink::RecordingSink;
use crate::common::with_timeout;

use std::error::Error;

use tokio::sync::mpsc;

use tasklink::engine::{BoardEngine, BoardEvent, EngineEvent, Runtime};
use tasklink::layout::LayoutConfig;

type TestResult = Result<(), Box<dyn Error>>;

fn chain_engine() -> BoardEngine {
    let snapshot = BoardBuilder::kanban()
        .task_in("backend", "todo")
        .task_in("design", "todo")
        .depends("design", "backend")
        .snapshot();
    BoardEngine::new(snapshot, LayoutConfig::default())
}

#[tokio::test]
async fn publishes_initial_view_and_each_recompute() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::channel::<EngineEvent>(16);
    let sink = RecordingSink::new();
    let views = sink.views();
    let runtime = Runtime::new(chain_engine(), rx, sink);

    tx.send(
        BoardEvent::TaskMoved {
            task_id: "backend".into(),
            column_id: "done".into(),
            position: 0,
        }
        .into(),
    )
    .await?;
    // Rejected: self-dependency. No view is published for it.
    tx.send(
        BoardEvent::DependencyAdded {
            task_id: "design".into(),
            depends_on: "design".into(),
        }
        .into(),
    )
    .await?;
    tx.send(EngineEvent::Shutdown).await?;

    let engine = with_timeout(runtime.run()).await?;

    let views = views.lock().unwrap().clone();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].version, 1);
    assert_eq!(
        views[0].blocked,
        vec![("design".to_string(), vec!["backend".to_string()])]
    );
    assert_eq!(views[1].version, 2);
    assert!(views[1].blocked.is_empty());
    assert_eq!(views[1].unblocked, vec!["design".to_string()]);
    assert_eq!(engine.snapshot().version(), 2);
    Ok(())
}

#[tokio::test]
async fn exits_when_channel_closes() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::channel::<EngineEvent>(4);
    let sink = RecordingSink::new();
    let views = sink.views();
    let runtime = Runtime::new(chain_engine(), rx, sink);

    tx.send(
        BoardEvent::DependencyRemoved {
            task_id: "design".into(),
            depends_on: "backend".into(),
        }
        .into(),
    )
    .await?;
    drop(tx);

    with_timeout(runtime.run()).await?;

    let views = views.lock().unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[1].edges, 0);
    assert!(views[1].unblocked.contains(&"design".to_string()));
    Ok(())
}
