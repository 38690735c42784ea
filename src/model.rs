// src/model.rs
// Value records handed between the pipeline and the store.
// Field names are the persisted document schema; do not rename.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::consts::TIMESTAMP_FMT;

/// Capture time, rendered `YYYY-MM-DD HH:MM:SS` (local time, no zone).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(t: NaiveDateTime) -> Self {
        Timestamp(t.format(TIMESTAMP_FMT).to_string())
    }

    /// Accepts only the canonical format.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT).map(Self::at)
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.0, TIMESTAMP_FMT).ok()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One holding as shown in the broker grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub units: f64,
    pub average_purchase_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub assets_share: f64,
    pub change: f64,
    pub profit: f64,
    pub investment_period: i64,
    pub timestamp: Timestamp,
}

/// All holdings of a wallet at one capture time. Built once by
/// `snapshot::SnapshotBuilder`, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    assets: Vec<Asset>,
    timestamp: Timestamp,
}

impl Snapshot {
    pub(crate) fn new(assets: Vec<Asset>, timestamp: Timestamp) -> Self {
        Self { assets, timestamp }
    }

    pub fn assets(&self) -> &[Asset] { &self.assets }
    pub fn timestamp(&self) -> &Timestamp { &self.timestamp }
    pub fn len(&self) -> usize { self.assets.len() }
    pub fn is_empty(&self) -> bool { self.assets.is_empty() }

    /// Sum of `value` over all holdings.
    pub fn total_value(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }
}

/// A tracked wallet and its snapshot history (append-only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub name: String,
    pub url: String,
    snapshots: Vec<Snapshot>,
    pub created_at: Timestamp,
    pub last_updated: Timestamp,
}

impl Wallet {
    pub fn new(name: &str, url: &str, now: Timestamp) -> Self {
        Self {
            name: s!(name),
            url: s!(url),
            snapshots: Vec::new(),
            created_at: now.clone(),
            last_updated: now,
        }
    }

    pub fn snapshots(&self) -> &[Snapshot] { &self.snapshots }

    pub fn last_snapshot(&self) -> Option<&Snapshot> { self.snapshots.last() }

    /// Append and bump `last_updated`.
    pub fn record(&mut self, snapshot: Snapshot, now: Timestamp) {
        self.snapshots.push(snapshot);
        self.last_updated = now;
    }
}
