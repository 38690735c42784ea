// src/error.rs
use thiserror::Error;

/// A cell that is not a plain decimal after `,` → `.` substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("not a decimal number: '{value}'")]
pub struct NumericFormatError {
    pub value: String,
}

/// A validated row whose numeric field could not be read.
/// `row` is the position among validated rows, `name` the raw name cell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("row {row} ('{name}'): field '{field}': {source}")]
pub struct AssetMappingError {
    pub row: usize,
    pub name: String,
    pub field: &'static str,
    #[source]
    pub source: NumericFormatError,
}

/// Fatal conditions of one document → snapshot run.
/// None of these ever leave a partial snapshot behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("grid payload not found: no `{function}.parse(\"…\");` call in document")]
    GridNotFound { function: String },

    #[error("grid payload is ambiguous: {count} `{function}.parse(\"…\");` calls in document")]
    GridAmbiguous { function: String, count: usize },

    #[error("grid payload is not a well-formed document: {0}")]
    GridParse(String),

    #[error(transparent)]
    AssetMapping(#[from] AssetMappingError),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("wallet document {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} holds wallet '{found}', not '{wanted}'")]
    NameClash { path: String, wanted: String, found: String },

    #[error("could not serialise wallet '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("could not queue email: {0}")]
    Spool(#[from] lettre::transport::file::Error),

    #[error("smtp: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv export: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv export i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a monitoring run can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
