// src/specs/mod.rs
//! # Page-reading specs
//!
//! This module knows **where the holdings live in a broker page** and how to get
//! them out as plain rows of cell text.
//!
//! ## What lives here
//! - **Payload location** (`grid`): the holdings table is not in the HTML body but
//!   inside an inline script, as `mygrid.parse("<escaped XML>");`. We locate that call,
//!   take the string literal and decode its HTML entities.
//! - **Row walking** (`rows`): parse the decoded XML, collect `<row>/<cell>` text,
//!   strip markup left inside cells, drop short rows (with a warning) and drop
//!   dividend / cash / total lines (silently).
//!
//! ## What does **not** live here
//! - Typed interpretation of cells (numbers, names): see `snapshot::mapper`.
//! - Fetching, persistence, notification.
//!
//! ## Typical call chain
//! ```text
//! runner → snapshot::capture → specs::grid::extract_payload
//!                            → specs::rows::parse_rows
//!                            → snapshot::mapper / builder
//! ```
//!
//! ## Conventions & invariants
//! - Exactly one payload per document. Zero or several is fatal.
//! - A payload that is not well-formed XML is fatal, never "no rows".
//! - Rows come back in document order and always have at least `MIN_ROW_CELLS` cells.
pub mod grid;
pub mod rows;

use crate::config::consts::{EXCLUDED_MARKERS, GRID_FUNCTION};

/// The embedding convention of one broker page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Script object whose `.parse("…")` call carries the payload.
    pub function: String,
    /// Substrings of the name cell marking non-holding rows.
    pub excluded: Vec<String>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            function: s!(GRID_FUNCTION),
            excluded: EXCLUDED_MARKERS.iter().map(|m| s!(*m)).collect(),
        }
    }
}

impl GridSpec {
    pub fn with_function(function: &str) -> Self {
        Self { function: s!(function), ..Self::default() }
    }

    /// Does this name cell denote a dividend/cash/total line?
    pub fn is_excluded(&self, name_cell: &str) -> bool {
        self.excluded.iter().any(|m| name_cell.contains(m.as_str()))
    }
}
