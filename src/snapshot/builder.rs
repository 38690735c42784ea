// src/snapshot/builder.rs
use crate::model::{Asset, Snapshot, Timestamp};

/// Collects assets for one capture. The timestamp is fixed at construction
/// and shared by every asset and the snapshot itself.
pub struct SnapshotBuilder {
    timestamp: Timestamp,
    assets: Vec<Asset>,
}

impl SnapshotBuilder {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp, assets: Vec::new() }
    }

    pub fn timestamp(&self) -> &Timestamp { &self.timestamp }

    pub fn push(&mut self, asset: Asset) {
        debug_assert_eq!(asset.timestamp, self.timestamp, "asset stamped with another capture time");
        self.assets.push(asset);
    }

    /// Order and count of pushed assets are preserved. No assets is a valid
    /// (fully liquidated) snapshot.
    pub fn build(self) -> Snapshot {
        Snapshot::new(self.assets, self.timestamp)
    }
}

impl Extend<Asset> for SnapshotBuilder {
    fn extend<I: IntoIterator<Item = Asset>>(&mut self, iter: I) {
        for a in iter { self.push(a); }
    }
}
