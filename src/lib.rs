// src/lib.rs
#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod log;
pub mod model;
pub mod notify;
pub mod runner;
pub mod snapshot;
pub mod specs;
pub mod store;

pub use error::{CaptureError, Error};
pub use model::{Asset, Snapshot, Timestamp, Wallet};
pub use snapshot::{capture, has_changed, Capture};
