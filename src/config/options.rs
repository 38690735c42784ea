// src/config/options.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::specs::GridSpec;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub grid: GridSpec,
    pub store: StoreOptions,
    pub notify: NotifyOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(STORE_DIR) }
    }
}

/// Sender/recipient and delivery settings for change notifications.
/// A spool dir wins over SMTP; with neither, notifications only go to the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    /// SMTP login password; the login is `from`.
    pub password: Option<String>,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub spool_dir: Option<PathBuf>,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            password: None,
            smtp_server: s!(SMTP_SERVER),
            smtp_port: SMTP_PORT,
            spool_dir: None,
        }
    }
}

impl NotifyOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Same as `from_env`, reading variables through `get`.
    /// Blank values count as unset; an unparsable port falls back to the default.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let var = |k: &str| get(k).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            from: var(ENV_EMAIL_FROM),
            to: var(ENV_EMAIL_TO),
            password: var(ENV_EMAIL_PASSWORD),
            smtp_server: var(ENV_SMTP_SERVER).unwrap_or(defaults.smtp_server),
            smtp_port: var(ENV_SMTP_PORT)
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.smtp_port),
            spool_dir: var(ENV_SPOOL_DIR).map(PathBuf::from),
        }
    }

    /// Both addresses present.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Addresses and password present.
    pub fn can_login(&self) -> bool {
        self.is_complete() && self.password.is_some()
    }

    /// Any email setting at all.
    pub fn is_attempted(&self) -> bool {
        self.from.is_some() || self.to.is_some() || self.password.is_some() || self.spool_dir.is_some()
    }
}
