//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_find` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The interactive domain prompt
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use dns_find::app::{read_domain, Console};
use dns_find::initialization::init_logger_with;
use dns_find::{run_lookup, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut console = Console::new(io::stdout());
    console.banner().context("Failed to write to stdout")?;

    let domain = match read_domain(io::stdin().lock(), &mut io::stdout()) {
        Ok(Some(domain)) => domain,
        Ok(None) => {
            eprintln!("dns_find error: no domain name entered");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("dns_find error: failed to read domain: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run_lookup(&config, &domain, &mut console).await {
        eprintln!("dns_find error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
