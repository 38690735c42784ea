// src/snapshot/mapper.rs
use crate::core::number::{parse_decimal, parse_whole};
use crate::error::AssetMappingError;
use crate::model::{Asset, Timestamp};
use crate::specs::rows::RawRow;

/// Build an `Asset` from a validated row.
/// `index` is the row's position among validated rows, for error reports.
///
/// Cell 2 (daily change %) is not part of `Asset` and is ignored here.
pub fn map_row(row: &RawRow, index: usize, timestamp: &Timestamp) -> Result<Asset, AssetMappingError> {
    let err = |field: &'static str| {
        move |source| AssetMappingError { row: index, name: s!(row.name_cell()), field, source }
    };
    let num = |i: usize, field: &'static str| parse_decimal(row.cell(i)).map_err(err(field));

    Ok(Asset {
        name: derive_name(row.name_cell()),
        units: num(3, "units")?,
        average_purchase_price: num(4, "average_purchase_price")?,
        current_price: num(5, "current_price")?,
        value: num(6, "value")?,
        assets_share: num(7, "assets_share")?,
        change: num(8, "change")?,
        profit: num(9, "profit")?,
        investment_period: parse_whole(row.cell(10)).map_err(err("investment_period"))?,
        timestamp: timestamp.clone(),
    })
}

/// Second half of the name cell, by character count (rounding the midpoint down).
///
/// The grid renders the label twice (ticker markup + plain text), so after tag
/// stripping `"CDRCDR"` → `"CDR"`. Kept literal for compatibility with stored
/// history: odd lengths and non-duplicated labels come out truncated, and any
/// separator between the copies stays at the front (`"A B A B"` → `" A B"`).
pub fn derive_name(cell: &str) -> String {
    let half = cell.chars().count() / 2;
    let start = cell.char_indices().nth(half).map(|(i, _)| i).unwrap_or(cell.len());
    s!(&cell[start..])
}
