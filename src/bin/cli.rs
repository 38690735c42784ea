// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use stalker::cli::{self, Args};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = stalker::log::init(Some(&args.log), args.level()) {
        eprintln!("Warning: logger not installed: {e}");
    }
    log::info!("=== STALKER STARTED ===");

    let res = cli::run(&args).wrap_err("stalker run failed");
    if let Err(e) = &res {
        log::error!("{e:#}");
    }
    res
}
