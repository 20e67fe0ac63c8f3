// src/lib.rs

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod render;
pub mod types;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::board::BoardSnapshot;
use crate::cli::CliArgs;
use crate::config::{BoardFile, load_and_validate};
use crate::engine::{BoardEngine, EngineEvent, Runtime};
use crate::layout::{HoverState, LayoutConfig};
use crate::render::OutputSink;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - snapshot loading and validation
/// - the board engine
/// - the output sink (stdout or `--out`)
/// - (with `--watch`) the file watcher and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let board_path = PathBuf::from(&args.board);
    let file = load_and_validate(&board_path)?;

    if args.check {
        print_check(&file);
        return Ok(());
    }

    let snapshot = BoardSnapshot::from_file(&file);
    let engine = BoardEngine::new(snapshot, LayoutConfig::from(&file.layout))
        .with_orientation_override(args.orientation);

    let mut hover = HoverState::new();
    if let Some(ref task) = args.hover {
        if !engine.derived().graph.contains(task) {
            warn!(task = %task, "hovered task is not on the board");
        }
        hover.enter(task.clone());
    }
    let sink = OutputSink::new(args.format, args.out.clone(), hover);

    if !args.watch {
        sink.write_once(engine.snapshot(), engine.derived())?;
        return Ok(());
    }

    let (rt_tx, rt_rx) = mpsc::channel::<EngineEvent>(64);
    let _watcher_handle = crate::watch::spawn_board_watcher(&board_path, rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(EngineEvent::Shutdown).await;
        });
    }

    let runtime = Runtime::new(engine, rt_rx, sink);
    let engine = runtime.run().await?;
    info!(version = engine.snapshot().version(), "tasklink stopped");
    Ok(())
}

/// `--check` output: what was loaded and what the graph looks like.
fn print_check(file: &BoardFile) {
    let snapshot = BoardSnapshot::from_file(file);
    let graph = snapshot.graph();
    let levels = graph.levels();

    println!("tasklink check");
    println!("  board.id = {}", file.board.id);
    println!("  board.name = {}", file.board.name);
    println!("  board.done_column_title = {}", file.board.done_column_title);
    println!("  layout.orientation = {:?}", file.layout.orientation);
    println!();

    println!("columns ({}):", snapshot.board().columns.len());
    for column in &snapshot.board().columns {
        println!("  - {} [{}]: {} task(s)", column.title, column.id, column.tasks.len());
    }

    let skipped = file.rows.dependencies.len().saturating_sub(graph.edge_count());
    println!(
        "dependencies: {} ({} skipped as dangling or duplicate)",
        graph.edge_count(),
        skipped
    );
    println!("levels: {}", if graph.task_count() == 0 { 0 } else { levels.max_level() + 1 });

    let cycles = crate::graph::cyclic_groups(&graph);
    if cycles.is_empty() {
        println!("cycles: none");
    } else {
        println!("cycles ({}):", cycles.len());
        for group in &cycles {
            println!("  - {}", group.join(" -> "));
        }
    }

    debug!("check complete (nothing rendered)");
}
