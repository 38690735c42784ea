// src/snapshot/mod.rs
// Document → Snapshot pipeline, plus the change check against the last one.
mod builder;
pub mod diff;
pub mod mapper;

pub use builder::SnapshotBuilder;
pub use diff::{changes, has_changed, Changes};

use crate::diagnostics::Diagnostics;
use crate::error::CaptureError;
use crate::model::{Snapshot, Timestamp};
use crate::specs::{grid, rows, rows::RawRow, GridSpec};

/// Result of one capture: the validated rows (for raw export) and the snapshot
/// built from them, one asset per row, same order.
#[derive(Clone, Debug)]
pub struct Capture {
    pub rows: Vec<RawRow>,
    pub snapshot: Snapshot,
}

/// Run the whole pipeline over a fetched page.
/// Any error means no snapshot at all; partial snapshots are never produced.
pub fn capture(
    doc: &str,
    spec: &GridSpec,
    timestamp: Timestamp,
    diag: &mut dyn Diagnostics,
) -> Result<Capture, CaptureError> {
    let payload = grid::extract_payload(doc, spec)?;
    let rows = rows::parse_rows(&payload, spec, diag)?;
    let snapshot = build_snapshot(&rows, timestamp)?;
    diag.info(&format!("Snapshot built: {} assets at {}", snapshot.len(), snapshot.timestamp()));
    Ok(Capture { rows, snapshot })
}

/// Map every row; the first mapping failure aborts.
pub fn build_snapshot(rows: &[RawRow], timestamp: Timestamp) -> Result<Snapshot, CaptureError> {
    let mut builder = SnapshotBuilder::new(timestamp);
    for (i, row) in rows.iter().enumerate() {
        let asset = mapper::map_row(row, i, builder.timestamp())?;
        builder.push(asset);
    }
    Ok(builder.build())
}
