// src/render/svg.rs

//! Standalone SVG rendering of a computed [`Layout`].

use std::fmt::Write;

use crate::board::BoardSnapshot;
use crate::engine::Derived;
use crate::layout::{EdgeEmphasis, HoverState};

const MARGIN: f32 = 24.0;

fn stroke(emphasis: EdgeEmphasis) -> (&'static str, f32, f32) {
    match emphasis {
        EdgeEmphasis::Normal => ("#64748b", 1.5, 1.0),
        EdgeEmphasis::Highlighted => ("#2563eb", 3.0, 1.0),
        EdgeEmphasis::Dimmed => ("#94a3b8", 1.0, 0.3),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the diagram. Edges whose endpoints have no position are skipped.
pub fn render_svg(snapshot: &BoardSnapshot, derived: &Derived, hover: &HoverState) -> String {
    let layout = &derived.layout;
    let width = layout.width + 2.0 * MARGIN;
    let height = layout.height + 2.0 * MARGIN;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
    );
    let _ = writeln!(
        out,
        r#"  <defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="context-stroke"/></marker></defs>"#
    );
    let _ = writeln!(out, r#"  <g transform="translate({MARGIN:.0},{MARGIN:.0})">"#);

    for edge in &layout.edges {
        if layout.node(&edge.source).is_none() || layout.node(&edge.target).is_none() {
            continue;
        }
        let (color, width, opacity) = stroke(hover.emphasis(&edge.source, &edge.target));
        let dash = if edge.forward { "" } else { r#" stroke-dasharray="6 4""# };
        let _ = writeln!(
            out,
            r#"    <path id="{}" d="{}" fill="none" stroke="{color}" stroke-width="{width}" stroke-opacity="{opacity}"{dash} marker-end="url(#arrow)"/>"#,
            escape(&edge.id),
            edge.path
        );
    }

    for node in &layout.nodes {
        let Some(task) = snapshot.board().task(&node.id) else {
            continue;
        };
        let blocked = derived.blocking.is_blocked(&node.id);
        let fill = if blocked { "#fef2f2" } else { "#ffffff" };
        let border = if hover.is_node_highlighted(&derived.graph, &node.id) {
            "#2563eb"
        } else if blocked {
            "#dc2626"
        } else {
            "#cbd5e1"
        };
        let r = node.rect;
        let c = r.center();
        let _ = writeln!(
            out,
            r#"    <g class="task {}" data-id="{}">"#,
            task.category,
            escape(&node.id)
        );
        let _ = writeln!(
            out,
            r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="8" fill="{fill}" stroke="{border}"/>"#,
            r.x, r.y, r.width, r.height
        );
        let _ = writeln!(
            out,
            r#"      <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="13">{}</text>"#,
            c.x,
            c.y,
            escape(&task.title)
        );
        if let Some(blockers) = derived.blocking.blocked_by(&node.id) {
            let _ = writeln!(
                out,
                r#"      <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="10" fill="{}">blocked by {}</text>"#,
                c.x,
                c.y + 16.0,
                "#dc2626",
                blockers.len()
            );
        }
        let _ = writeln!(out, "    </g>");
    }

    let _ = writeln!(out, "  </g>");
    let _ = writeln!(out, "</svg>");
    out
}
