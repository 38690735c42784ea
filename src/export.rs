// src/export.rs
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::consts::FILE_STAMP_FMT;
use crate::core::sanitize::sanitize_wallet_filename;
use crate::error::ExportError;
use crate::model::Timestamp;
use crate::specs::rows::RawRow;

pub const HEADERS: [&str; 10] = [
    "Asset",
    "Daily Change [%]",
    "Units",
    "Average Purchase Price [PLN]",
    "Current Price [PLN]",
    "Value [PLN]",
    "Asset Share [%]",
    "Change [%]",
    "Profit [PLN]",
    "Investment Period [days]",
];

/// Header line, then cells 1..=10 of each row as scraped (locale formatting kept).
pub fn write_rows<W: Write>(w: W, rows: &[RawRow]) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(w);
    out.write_record(HEADERS)?;
    for row in rows {
        out.write_record(&row.cells()[1..=10])?;
    }
    out.flush()?;
    Ok(())
}

/// `<dir>/<wallet>_<YYYYmmdd_HHMMSS>.csv`, stamped with the capture time.
pub fn export_path(dir: &Path, wallet: &str, captured: &Timestamp) -> PathBuf {
    let stamp = captured
        .to_naive()
        .map(|t| t.format(FILE_STAMP_FMT).to_string())
        .unwrap_or_else(|| sanitize_wallet_filename(captured.as_str()));
    dir.join(format!("{}_{}.csv", sanitize_wallet_filename(wallet), stamp))
}

/// Write the rows to a new file under `dir` (created if missing).
pub fn export_rows(dir: &Path, wallet: &str, captured: &Timestamp, rows: &[RawRow]) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = export_path(dir, wallet, captured);
    log::info!("Saving data to CSV file: {}", path.display());
    write_rows(File::create(&path)?, rows)?;
    log::info!("Saved {} asset rows → {}", rows.len(), path.display());
    Ok(path)
}
