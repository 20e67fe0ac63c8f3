// src/board/fingerprint.rs

//! Content fingerprint of a board snapshot.
//!
//! Two snapshots with the same `[board]` section and rows share a
//! fingerprint, whatever their version numbers. The engine compares
//! fingerprints to decide whether derived state must be recomputed.

use blake3::Hasher;

use crate::board::view::done_title_key;
use crate::config::{BoardRows, BoardSection};

/// Field separator; cannot appear in TOML basic strings unescaped.
const FIELD_SEP: &[u8] = &[0x1f];
/// Row separator.
const ROW_SEP: &[u8] = &[0x1e];

fn update_field(hasher: &mut Hasher, value: &str) {
    hasher.update(value.as_bytes());
    hasher.update(FIELD_SEP);
}

fn update_opt(hasher: &mut Hasher, value: Option<&str>) {
    match value {
        Some(v) => {
            hasher.update(b"+");
            update_field(hasher, v);
        }
        None => update_field(hasher, "-"),
    }
}

/// Compute the hex-encoded blake3 fingerprint of the given rows.
///
/// Row order matters: it decides tie-breaks between equal positions and the
/// order of `depends_on` lists.
pub fn compute_fingerprint(section: &BoardSection, rows: &BoardRows) -> String {
    let mut hasher = Hasher::new();

    update_field(&mut hasher, &section.id);
    update_field(&mut hasher, &section.name);
    update_field(&mut hasher, &done_title_key(&section.done_column_title));
    hasher.update(ROW_SEP);

    for c in rows.columns.iter() {
        update_field(&mut hasher, "column");
        update_field(&mut hasher, &c.id);
        update_field(&mut hasher, &c.title);
        update_field(&mut hasher, &c.position.to_string());
        hasher.update(ROW_SEP);
    }

    for t in rows.tasks.iter() {
        update_field(&mut hasher, "task");
        update_field(&mut hasher, &t.id);
        update_field(&mut hasher, &t.column_id);
        update_field(&mut hasher, &t.title);
        update_opt(&mut hasher, t.description.as_deref());
        update_opt(&mut hasher, t.assignee_name.as_deref());
        update_opt(&mut hasher, t.assignee_id.as_deref());
        update_opt(&mut hasher, t.due_date.as_deref());
        update_field(&mut hasher, t.category.as_str());
        update_field(&mut hasher, &t.position.to_string());
        hasher.update(ROW_SEP);
    }

    for d in rows.dependencies.iter() {
        update_field(&mut hasher, "dependency");
        update_field(&mut hasher, &d.id);
        update_field(&mut hasher, &d.task_id);
        update_field(&mut hasher, &d.depends_on_task_id);
        hasher.update(ROW_SEP);
    }

    hasher.finalize().to_hex().to_string()
}
