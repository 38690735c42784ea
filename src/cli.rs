// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::config::consts::{FETCH_TIMEOUT_SECS, GRID_FUNCTION, LOG_FILE, STORE_DIR};
use crate::config::options::{AppOptions, NotifyOptions};
use crate::core::net::HttpFetcher;
use crate::diagnostics::LogDiagnostics;
use crate::error::Error;
use crate::model::Timestamp;
use crate::notify::{LogNotifier, Notifier, SmtpNotifier, SpoolNotifier};
use crate::runner::{Monitor, RunRequest};
use crate::specs::GridSpec;
use crate::store::{JsonStore, WalletStore};

/// Watch a broker wallet page and record a snapshot whenever holdings change.
#[derive(Debug, Parser)]
#[command(name = "stalker", version, about)]
pub struct Args {
    /// URL of the wallet page to scrape
    #[arg(long, required_unless_present = "list_wallets")]
    pub url: Option<String>,

    /// Wallet name (storage key)
    #[arg(long, required_unless_present = "list_wallets")]
    pub name: Option<String>,

    /// Directory holding one JSON document per wallet
    #[arg(long, default_value = STORE_DIR)]
    pub store: PathBuf,

    /// Also write the scraped rows as CSV into this directory
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Log file (appended)
    #[arg(long, default_value = LOG_FILE)]
    pub log: PathBuf,

    /// Queue change emails as .eml files here instead of sending over SMTP
    /// (needs EMAIL_FROM / EMAIL_TO)
    #[arg(long)]
    pub spool: Option<PathBuf>,

    /// Script object whose .parse("…") call embeds the grid
    #[arg(long = "grid-fn", default_value = GRID_FUNCTION)]
    pub grid_fn: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the captured snapshot as JSON on stdout
    #[arg(long)]
    pub print: bool,

    /// List stored wallets and exit
    #[arg(long)]
    pub list_wallets: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Flags over env over defaults.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.fetch.timeout = Duration::from_secs(self.timeout);
        opts.grid = GridSpec::with_function(&self.grid_fn);
        opts.store.dir = self.store.clone();
        opts.notify = NotifyOptions::from_env();
        if let Some(dir) = &self.spool {
            opts.notify.spool_dir = Some(dir.clone());
        }
        opts
    }
}

/// Spool dir if set, else SMTP if it can log in, else the log.
fn pick_notifier(opts: &NotifyOptions) -> Box<dyn Notifier> {
    if let Some(n) = SpoolNotifier::from_options(opts) {
        return Box::new(n);
    }
    if opts.spool_dir.is_none() {
        match SmtpNotifier::from_options(opts) {
            Ok(Some(n)) => return Box::new(n),
            Ok(None) => {}
            Err(e) => {
                log::error!("SMTP setup failed: {e}. Notifications go to the log only.");
                return Box::new(LogNotifier);
            }
        }
    }
    if opts.is_attempted() {
        log::error!("Email configuration is incomplete. Notifications go to the log only.");
    }
    Box::new(LogNotifier)
}

pub fn run(args: &Args) -> Result<(), Error> {
    let opts = args.options();
    let mut store = JsonStore::new(&opts.store.dir);

    if args.list_wallets {
        for name in store.list()? {
            println!("{name}");
        }
        return Ok(());
    }

    // clap guarantees both unless --list-wallets
    let (Some(url), Some(name)) = (args.url.as_deref(), args.name.as_deref()) else {
        return Ok(());
    };

    let fetcher = HttpFetcher::new(&opts.fetch)?;
    let mut notifier = pick_notifier(&opts.notify);
    let mut diag = LogDiagnostics;

    let mut monitor = Monitor {
        grid: &opts.grid,
        fetcher: &fetcher,
        store: &mut store,
        notifier: notifier.as_mut(),
        diag: &mut diag,
    };
    let req = RunRequest { wallet: name, url, csv_dir: args.csv.as_deref() };
    let summary = monitor.run(&req, Timestamp::now())?;

    if args.print {
        match serde_json::to_string_pretty(&summary.snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not render snapshot: {e}"),
        }
    }
    log::info!(
        "Done: {} assets, {}",
        summary.snapshot.len(),
        if summary.created { "wallet created" } else if summary.changed { "changed" } else { "unchanged" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_pair() {
        let a = Args::try_parse_from(["stalker", "--url", "https://x/w", "--name", "ike"]).unwrap();
        assert_eq!(a.url.as_deref(), Some("https://x/w"));
        assert_eq!(a.name.as_deref(), Some("ike"));
        assert_eq!(a.store, PathBuf::from(STORE_DIR));
        assert_eq!(a.level(), LevelFilter::Info);
        assert_eq!(a.options().grid, GridSpec::default());
    }

    #[test]
    fn url_and_name_required() {
        assert!(Args::try_parse_from(["stalker", "--url", "https://x/w"]).is_err());
        assert!(Args::try_parse_from(["stalker", "--name", "ike"]).is_err());
        assert!(Args::try_parse_from(["stalker", "--list-wallets"]).is_ok());
    }

    #[test]
    fn flags_reach_options() {
        let a = Args::try_parse_from([
            "stalker", "--url", "u", "--name", "n", "--grid-fn", "g2", "--timeout", "5",
            "--store", "db", "--spool", "outbox", "-vv",
        ])
        .unwrap();
        let o = a.options();
        assert_eq!(o.grid.function, "g2");
        assert_eq!(o.fetch.timeout, Duration::from_secs(5));
        assert_eq!(o.store.dir, PathBuf::from("db"));
        assert_eq!(o.notify.spool_dir, Some(PathBuf::from("outbox")));
        assert_eq!(a.level(), LevelFilter::Trace);
    }
}
