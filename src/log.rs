// src/log.rs
// Sink for the `log` facade: every record goes to stderr and is appended to a log file.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct FileLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}: {}\n", record.level(), record.target(), record.args());

        let _ = std::io::stderr().write_all(line.as_bytes());
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the logger. `path: None` logs to stderr only; a file that cannot
/// be opened degrades to stderr only as well (reported once).
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<(), SetLoggerError> {
    start();
    let mut open_err = None;
    let file = path.and_then(|p| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(p)
            .map_err(|e| open_err = Some(format!("cannot open log file {}: {e}", p.display())))
            .ok()
    });

    log::set_boxed_logger(Box::new(FileLogger { level, file: file.map(Mutex::new) }))?;
    log::set_max_level(level);

    if let Some(msg) = open_err {
        log::warn!("{msg}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_format() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn installs_once_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logbook");
        init(Some(&path), LevelFilter::Info).unwrap();
        assert!(init(None, LevelFilter::Info).is_err());

        log::info!(target: "stalker::test", "hello");
        log::debug!("filtered out");
        log::logger().flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("][INFO] stalker::test: hello\n"), "{text}");
        assert!(!text.contains("filtered out"));
    }
}
