// src/store.rs
// Wallet persistence. One JSON document per wallet, keyed by wallet name.
use std::{collections::HashMap, fs, io, path::{Path, PathBuf}};

use crate::core::sanitize::sanitize_wallet_filename;
use crate::error::StoreError;
use crate::model::Wallet;

pub trait WalletStore {
    fn load(&self, name: &str) -> Result<Option<Wallet>, StoreError>;
    fn save(&mut self, wallet: &Wallet) -> Result<(), StoreError>;
    /// Names of all stored wallets, sorted.
    fn list(&self) -> Result<Vec<String>, StoreError>;
}

/// `<dir>/<sanitized name>.json`, written via a temp file + rename.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_wallet_filename(name)))
    }

    fn read(path: &Path) -> Result<Option<Wallet>, StoreError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err(path, e)),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { path: path.display().to_string(), source })
    }
}

fn io_err(path: &Path, source: io::Error) -> StoreError {
    StoreError::Io { path: path.display().to_string(), source }
}

impl WalletStore for JsonStore {
    fn load(&self, name: &str) -> Result<Option<Wallet>, StoreError> {
        let path = self.path_for(name);
        match Self::read(&path)? {
            Some(w) if w.name != name => Err(StoreError::NameClash {
                path: path.display().to_string(),
                wanted: s!(name),
                found: w.name,
            }),
            other => Ok(other),
        }
    }

    fn save(&mut self, wallet: &Wallet) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| io_err(&self.dir, e))?;

        let path = self.path_for(&wallet.name);
        if let Some(existing) = Self::read(&path)? {
            if existing.name != wallet.name {
                return Err(StoreError::NameClash {
                    path: path.display().to_string(),
                    wanted: wallet.name.clone(),
                    found: existing.name,
                });
            }
        }

        let body = serde_json::to_string_pretty(wallet)
            .map_err(|source| StoreError::Serialize { name: wallet.name.clone(), source })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| io_err(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
        log::debug!("Wallet '{}' saved to {}", wallet.name, path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(|e| io_err(&self.dir, e))? {
            let path = entry.map_err(|e| io_err(&self.dir, e))?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some("json") { continue; }
            if let Some(w) = Self::read(&path)? {
                names.push(w.name);
            }
        }
        names.sort();
        Ok(names)
    }
}

/// In-process store; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    wallets: HashMap<String, Wallet>,
}

impl WalletStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Option<Wallet>, StoreError> {
        Ok(self.wallets.get(name).cloned())
    }

    fn save(&mut self, wallet: &Wallet) -> Result<(), StoreError> {
        self.wallets.insert(wallet.name.clone(), wallet.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.wallets.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
