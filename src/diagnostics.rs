// src/diagnostics.rs
/// Diagnostics sink handed to the parsing pipeline.
/// Frontends decide where messages go; the pipeline never touches a global logger.
pub trait Diagnostics {
    /// Non-fatal anomaly worth a human look (e.g. a malformed grid row).
    fn warn(&mut self, _msg: &str) {}

    /// Progress note.
    fn info(&mut self, _msg: &str) {}
}

/// A no-op sink.
pub struct NullDiagnostics;
impl Diagnostics for NullDiagnostics {}

/// Forwards to the `log` facade under the `stalker::pipeline` target.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, msg: &str) {
        log::warn!(target: "stalker::pipeline", "{msg}");
    }
    fn info(&mut self, msg: &str) {
        log::info!(target: "stalker::pipeline", "{msg}");
    }
}

/// Keeps everything in memory.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Diagnostics for Recorder {
    fn warn(&mut self, msg: &str) {
        self.warnings.push(s!(msg));
    }
    fn info(&mut self, msg: &str) {
        self.infos.push(s!(msg));
    }
}
