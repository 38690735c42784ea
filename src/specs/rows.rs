// src/specs/rows.rs
//! Walk the decoded grid payload into validated rows of cell text.
//!
//! Payload shape (dhtmlx grid XML):
//! ```text
//! <rows>
//!   <row id="1"><cell>…</cell><cell><![CDATA[<b>AAPL</b>AAPL]]></cell>…</row>
//!   …
//! </rows>
//! ```
//! Column layout after index 0 (a row handle/icon):
//! 1 asset, 2 daily change %, 3 units, 4 avg purchase price, 5 current price,
//! 6 value, 7 asset share %, 8 change %, 9 profit, 10 investment period (days).

use crate::config::consts::MIN_ROW_CELLS;
use crate::core::html::strip_tags;
use crate::diagnostics::Diagnostics;
use crate::error::CaptureError;

use super::GridSpec;

/// Cell texts of one holding row. Always at least `MIN_ROW_CELLS` long,
/// so indices `1..=10` are safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow(Vec<String>);

impl RawRow {
    pub fn cells(&self) -> &[String] { &self.0 }

    /// Cell text at `i`. Panics past the row length; `1..=10` never does.
    pub fn cell(&self, i: usize) -> &str { &self.0[i] }

    /// The raw asset-name cell (index 1).
    pub fn name_cell(&self) -> &str { &self.0[1] }
}

impl TryFrom<Vec<String>> for RawRow {
    type Error = Vec<String>;

    /// Hands the cells back when there are too few of them.
    fn try_from(cells: Vec<String>) -> Result<Self, Self::Error> {
        if cells.len() < MIN_ROW_CELLS { Err(cells) } else { Ok(RawRow(cells)) }
    }
}

/// Parse the payload and return holding rows in document order.
///
/// - `<row>` elements are found at any depth below the root.
/// - Cell text is the element's own text (empty if none), tags stripped, trimmed.
/// - Short rows: skipped, reported through `diag.warn`.
/// - Excluded rows (dividends, cash, totals): skipped silently.
pub fn parse_rows(
    payload: &str,
    spec: &GridSpec,
    diag: &mut dyn Diagnostics,
) -> Result<Vec<RawRow>, CaptureError> {
    let doc = roxmltree::Document::parse(payload)
        .map_err(|e| CaptureError::GridParse(e.to_string()))?;

    let mut out = Vec::new();
    let mut skipped = 0usize;

    for row in doc.root_element().descendants().skip(1).filter(|n| n.has_tag_name("row")) {
        let cells: Vec<String> = row
            .children()
            .filter(|n| n.has_tag_name("cell"))
            .map(|cell| strip_tags(cell.text().unwrap_or("")))
            .collect();

        let raw = match RawRow::try_from(cells) {
            Ok(raw) => raw,
            Err(cells) => {
                diag.warn(&format!("Skipping row with insufficient cells: {cells:?}"));
                continue;
            }
        };

        if spec.is_excluded(raw.name_cell()) {
            skipped += 1;
            continue;
        }
        out.push(raw);
    }

    diag.info(&format!("Grid parsed: {} asset rows, {} summary rows skipped", out.len(), skipped));
    Ok(out)
}
