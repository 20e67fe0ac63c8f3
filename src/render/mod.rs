// src/render/mod.rs

//! Output of the dependency flow view.
//!
//! - [`flow`] builds the node/edge descriptors and summary figures.
//! - [`text`] renders a plain-text report.
//! - [`svg`] renders the laid-out diagram.
//!
//! [`OutputSink`] is the production [`ViewSink`]: it renders every published
//! view and writes it to stdout or to a file.

pub mod flow;
pub mod svg;
pub mod text;

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::board::BoardSnapshot;
use crate::engine::{Derived, ViewSink, ViewUpdate};
use crate::errors::Result;
use crate::layout::HoverState;

pub use flow::{FlowEdge, FlowNode, FlowStats, FlowView};
pub use svg::render_svg;
pub use text::render_report;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Svg,
}

impl OutputFormat {
    pub fn render(self, snapshot: &BoardSnapshot, derived: &Derived, hover: &HoverState) -> String {
        match self {
            OutputFormat::Text => render_report(snapshot, derived, hover),
            OutputFormat::Svg => render_svg(snapshot, derived, hover),
        }
    }
}

/// Renders views and writes them to stdout or `out`.
#[derive(Debug, Clone)]
pub struct OutputSink {
    format: OutputFormat,
    out: Option<PathBuf>,
    hover: HoverState,
}

impl OutputSink {
    pub fn new(format: OutputFormat, out: Option<PathBuf>, hover: HoverState) -> Self {
        Self { format, out, hover }
    }

    pub fn render(&self, snapshot: &BoardSnapshot, derived: &Derived) -> String {
        self.format.render(snapshot, derived, &self.hover)
    }

    /// Render and write once, synchronously.
    pub fn write_once(&self, snapshot: &BoardSnapshot, derived: &Derived) -> Result<()> {
        let rendered = self.render(snapshot, derived);
        match self.out {
            Some(ref path) => {
                std::fs::write(path, rendered)?;
                info!(path = %path.display(), version = derived.version, "view written");
            }
            None => print_view(&rendered),
        }
        Ok(())
    }
}

/// Rendered views already end in a newline.
fn print_view(rendered: &str) {
    print!("{rendered}");
}

impl ViewSink for OutputSink {
    fn publish(
        &mut self,
        update: ViewUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let rendered = self.render(&update.snapshot, &update.derived);
            match self.out {
                Some(ref path) => {
                    tokio::fs::write(path, rendered).await?;
                    info!(
                        path = %path.display(),
                        version = update.derived.version,
                        "view written"
                    );
                }
                None => {
                    print_view(&rendered);
                    debug!(version = update.derived.version, "view printed");
                }
            }
            Ok(())
        })
    }
}
