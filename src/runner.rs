// src/runner.rs
// One monitoring pass over one wallet:
//   fetch → capture → (csv) → diff against last snapshot → persist → notify.
// Wallets are independent; run several `Monitor`s side by side if needed.
use std::path::{Path, PathBuf};

use crate::core::net::Fetch;
use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::export;
use crate::model::{Snapshot, Timestamp, Wallet};
use crate::notify::{change_message, Notifier};
use crate::snapshot::{self, Changes};
use crate::specs::GridSpec;
use crate::store::WalletStore;

/// What to watch.
pub struct RunRequest<'a> {
    pub wallet: &'a str,
    pub url: &'a str,
    /// Also dump the raw rows as CSV into this directory.
    pub csv_dir: Option<&'a Path>,
}

/// What happened.
pub struct RunSummary {
    pub snapshot: Snapshot,
    /// Snapshot was appended to the wallet history.
    pub changed: bool,
    /// Wallet did not exist before this run.
    pub created: bool,
    /// Differences against the previous snapshot; `None` when there was none.
    pub changes: Option<Changes>,
    pub csv: Option<PathBuf>,
    pub notified: bool,
}

/// Collaborators for a run. Borrowed, so callers keep ownership of the store
/// and notifier between runs.
pub struct Monitor<'a> {
    pub grid: &'a GridSpec,
    pub fetcher: &'a dyn Fetch,
    pub store: &'a mut dyn WalletStore,
    pub notifier: &'a mut dyn Notifier,
    pub diag: &'a mut dyn Diagnostics,
}

impl Monitor<'_> {
    /// `now` stamps the snapshot and the wallet bookkeeping fields.
    pub fn run(&mut self, req: &RunRequest, now: Timestamp) -> Result<RunSummary, Error> {
        log::info!("Starting scraping webpage: {}", req.url);
        let doc = self.fetcher.fetch(req.url)?;

        log::info!("Parsing snapshot...");
        let cap = snapshot::capture(&doc, self.grid, now.clone(), &mut *self.diag)?;

        let csv = match req.csv_dir {
            Some(dir) => Some(export::export_rows(dir, req.wallet, cap.snapshot.timestamp(), &cap.rows)?),
            None => None,
        };

        let (wallet, created, changed, changes, dirty) = match self.store.load(req.wallet)? {
            None => {
                log::info!("New wallet '{}'", req.wallet);
                let mut w = Wallet::new(req.wallet, req.url, now.clone());
                w.record(cap.snapshot.clone(), now);
                (w, true, true, None, true)
            }
            Some(mut w) => {
                let changes = w.last_snapshot().map(|prev| snapshot::changes(prev, &cap.snapshot));
                let changed = snapshot::has_changed(w.last_snapshot(), &cap.snapshot);
                let moved = w.url != req.url;
                if moved {
                    log::info!("Wallet '{}' source moved: {} → {}", w.name, w.url, req.url);
                    w.url = s!(req.url);
                }
                if changed {
                    w.record(cap.snapshot.clone(), now);
                }
                (w, false, changed, changes, changed || moved)
            }
        };

        if dirty {
            self.store.save(&wallet)?;
        }

        let mut notified = false;
        if changed {
            log::info!("Wallet '{}' changed; snapshot {} recorded", wallet.name, wallet.snapshots().len());
            let msg = change_message(&wallet.name, &wallet.url, &cap.snapshot, changes.as_ref());
            match self.notifier.send(&msg) {
                Ok(()) => notified = true,
                Err(e) => log::error!("Failed to send notification: {e}"),
            }
        } else {
            log::info!("Wallet '{}' unchanged", wallet.name);
        }

        Ok(RunSummary { snapshot: cap.snapshot, changed, created, changes, csv, notified })
    }
}
