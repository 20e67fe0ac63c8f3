// src/engine/core.rs

//! Pure board engine.
//!
//! [`BoardEngine`] is synchronous and deterministic: it consumes
//! [`EngineEvent`]s, swaps in the next [`BoardSnapshot`] and rebuilds the
//! derived state (graph, levels, blocking, layout) when the snapshot content
//! or the layout configuration changed. It has no channels and does no IO, so
//! it can be tested without Tokio.

use tracing::{debug, info, warn};

use crate::board::BoardSnapshot;
use crate::engine::{BoardEvent, EngineEvent, EngineStep};
use crate::errors::Result;
use crate::graph::{BlockingState, DependencyGraph, LevelMap, cyclic_groups};
use crate::layout::{Layout, LayoutConfig, compute_layout};
use crate::render::FlowView;
use crate::types::{Orientation, TaskId};

/// Everything computed from one snapshot.
#[derive(Debug, Clone)]
pub struct Derived {
    /// Snapshot version this state was computed from.
    pub version: u64,
    pub fingerprint: String,
    pub config: LayoutConfig,
    pub graph: DependencyGraph,
    pub levels: LevelMap,
    pub blocking: BlockingState,
    pub layout: Layout,
    /// Groups of tasks that depend on each other in a loop.
    pub cycles: Vec<Vec<TaskId>>,
}

impl Derived {
    pub fn compute(snapshot: &BoardSnapshot, config: &LayoutConfig) -> Self {
        let graph = snapshot.graph();
        let levels = graph.levels();
        let blocking = BlockingState::derive(&graph, &snapshot.done_task_ids());
        let layout = compute_layout(&graph, &levels, config);
        let cycles = if levels.has_cycles() {
            cyclic_groups(&graph)
        } else {
            Vec::new()
        };

        Self {
            version: snapshot.version(),
            fingerprint: snapshot.fingerprint().to_string(),
            config: config.clone(),
            graph,
            levels,
            blocking,
            layout,
            cycles,
        }
    }

    /// Node and edge descriptors for a renderer.
    pub fn flow_view(&self, snapshot: &BoardSnapshot) -> FlowView {
        FlowView::build(snapshot, &self.graph, &self.levels, &self.blocking)
    }
}

#[derive(Debug)]
pub struct BoardEngine {
    snapshot: BoardSnapshot,
    config: LayoutConfig,
    /// Wins over the `[layout]` orientation of reloaded files.
    orientation_override: Option<Orientation>,
    derived: Derived,
}

impl BoardEngine {
    pub fn new(snapshot: BoardSnapshot, config: LayoutConfig) -> Self {
        let derived = Derived::compute(&snapshot, &config);
        log_cycles(&derived.cycles);
        Self {
            snapshot,
            config,
            orientation_override: None,
            derived,
        }
    }

    /// Pin the orientation regardless of what reloaded files say.
    pub fn with_orientation_override(mut self, orientation: Option<Orientation>) -> Self {
        self.orientation_override = orientation;
        match orientation {
            Some(o) if o != self.config.orientation => {
                self.config.orientation = o;
                self.derived = Derived::compute(&self.snapshot, &self.config);
            }
            _ => {}
        }
        self
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn flow_view(&self) -> FlowView {
        self.derived.flow_view(&self.snapshot)
    }

    /// Handle a single engine event.
    ///
    /// Rejected mutations are logged and reported in
    /// [`EngineStep::rejected`]; they never stop the engine.
    pub fn step(&mut self, event: EngineEvent) -> EngineStep {
        match event {
            EngineEvent::Shutdown => EngineStep {
                keep_running: false,
                ..EngineStep::default()
            },
            EngineEvent::Board(event) => match self.apply(event) {
                Ok(step) => step,
                Err(err) => {
                    warn!(error = %err, "board event rejected");
                    EngineStep {
                        rejected: Some(err.to_string()),
                        keep_running: true,
                        ..EngineStep::default()
                    }
                }
            },
        }
    }

    /// Apply one board event and refresh derived state if needed.
    pub fn apply(&mut self, event: BoardEvent) -> Result<EngineStep> {
        let next = match event {
            BoardEvent::DependencyAdded {
                task_id,
                depends_on,
            } => self.snapshot.add_dependency(&task_id, &depends_on)?,
            BoardEvent::DependencyRemoved {
                task_id,
                depends_on,
            } => self.snapshot.remove_dependency(&task_id, &depends_on)?,
            BoardEvent::TaskMoved {
                task_id,
                column_id,
                position,
            } => self.snapshot.move_task(&task_id, &column_id, position)?,
            BoardEvent::TaskDeleted { task_id } => self.snapshot.delete_task(&task_id)?,
            BoardEvent::Reload(file) => {
                let mut config = LayoutConfig::from(&file.layout);
                if let Some(o) = self.orientation_override {
                    config.orientation = o;
                }
                self.config = config;
                self.snapshot.reload(file.board, file.rows)
            }
        };
        self.snapshot = next;
        Ok(self.refresh())
    }

    fn refresh(&mut self) -> EngineStep {
        let unchanged = self.snapshot.fingerprint() == self.derived.fingerprint
            && self.config == self.derived.config;
        if unchanged {
            debug!(
                version = self.snapshot.version(),
                "snapshot content unchanged; keeping derived state"
            );
            return EngineStep {
                keep_running: true,
                ..EngineStep::default()
            };
        }

        let derived = Derived::compute(&self.snapshot, &self.config);
        let unblocked = derived.blocking.newly_unblocked(&self.derived.blocking);
        for task in &unblocked {
            info!(task = %task, "task unblocked");
        }
        if derived.cycles != self.derived.cycles {
            log_cycles(&derived.cycles);
        }

        debug!(
            from = self.derived.version,
            to = derived.version,
            blocked = derived.blocking.entries().len(),
            "derived state recomputed"
        );
        self.derived = derived;

        EngineStep {
            recomputed: true,
            unblocked,
            rejected: None,
            keep_running: true,
        }
    }
}

fn log_cycles(cycles: &[Vec<TaskId>]) {
    for group in cycles {
        warn!(tasks = ?group, "dependency cycle detected; levels are approximate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardRows, BoardSection, ColumnRow, DependencyRow, TaskRow};
    use crate::types::Category;

    fn task(id: &str, column_id: &str, position: i64) -> TaskRow {
        TaskRow {
            id: id.to_string(),
            column_id: column_id.to_string(),
            title: id.to_string(),
            description: None,
            assignee_name: None,
            assignee_id: None,
            due_date: None,
            category: Category::Code,
            position,
        }
    }

    fn engine() -> BoardEngine {
        let rows = BoardRows {
            columns: vec![
                ColumnRow {
                    id: "todo".into(),
                    title: "To Do".into(),
                    position: 0,
                },
                ColumnRow {
                    id: "done".into(),
                    title: "Done".into(),
                    position: 1,
                },
            ],
            tasks: vec![task("design", "todo", 0), task("backend", "todo", 1)],
            dependencies: vec![DependencyRow::new("e1", "design", "backend")],
        };
        let snapshot = BoardSnapshot::new(BoardSection::default(), rows);
        BoardEngine::new(snapshot, LayoutConfig::default())
    }

    #[test]
    fn moving_prerequisite_to_done_unblocks_dependent() {
        let mut engine = engine();
        assert!(engine.derived().blocking.is_blocked("design"));

        let step = engine.step(EngineEvent::Board(BoardEvent::TaskMoved {
            task_id: "backend".into(),
            column_id: "done".into(),
            position: 0,
        }));

        assert!(step.recomputed);
        assert!(step.keep_running);
        assert_eq!(step.unblocked, vec!["design".to_string()]);
        assert!(!engine.derived().blocking.is_blocked("design"));
        assert_eq!(engine.derived().version, 2);
    }

    #[test]
    fn rejected_event_keeps_snapshot() {
        let mut engine = engine();
        let step = engine.step(EngineEvent::Board(BoardEvent::DependencyAdded {
            task_id: "design".into(),
            depends_on: "design".into(),
        }));

        assert!(step.rejected.is_some());
        assert!(!step.recomputed);
        assert!(step.keep_running);
        assert_eq!(engine.snapshot().version(), 1);
    }

    #[test]
    fn reload_with_same_content_skips_recompute() {
        let mut engine = engine();
        let file = crate::config::BoardFile::new_unchecked(
            BoardSection::default(),
            crate::config::LayoutSection::default(),
            engine.snapshot().rows().clone(),
        );

        let step = engine.step(EngineEvent::Board(BoardEvent::Reload(file)));

        assert!(!step.recomputed);
        assert_eq!(engine.snapshot().version(), 2);
        assert_eq!(engine.derived().version, 1);
    }

    #[test]
    fn cycle_is_recorded_in_derived_state() {
        let mut engine = engine();
        let step = engine.step(EngineEvent::Board(BoardEvent::DependencyAdded {
            task_id: "backend".into(),
            depends_on: "design".into(),
        }));

        assert!(step.recomputed);
        assert_eq!(engine.derived().cycles.len(), 1);
        assert_eq!(engine.derived().layout.nodes.len(), 2);
    }

    #[test]
    fn shutdown_stops_engine() {
        let mut engine = engine();
        assert!(!engine.step(EngineEvent::Shutdown).keep_running);
    }
}
