// src/config/consts.rs

// Grid embedding convention
pub const GRID_FUNCTION: &str = "mygrid";
pub const MIN_ROW_CELLS: usize = 11;
// Name-cell markers of dividend, cash and total lines
pub const EXCLUDED_MARKERS: &[&str] = &["Dywidenda", "Gotówka", "Total"];

// Timestamps
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const FILE_STAMP_FMT: &str = "%Y%m%d_%H%M%S";

// Net config
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Local store
pub const STORE_DIR: &str = ".store/wallets";
pub const LOG_FILE: &str = "logbook";

// Notification env vars
pub const ENV_EMAIL_FROM: &str = "EMAIL_FROM";
pub const ENV_EMAIL_TO: &str = "EMAIL_TO";
pub const ENV_EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const ENV_SMTP_SERVER: &str = "SMTP_SERVER";
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";
pub const ENV_SPOOL_DIR: &str = "STALKER_SPOOL_DIR";

// SMTP defaults
pub const SMTP_SERVER: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 587;
