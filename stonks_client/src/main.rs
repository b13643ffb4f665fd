//! Stonks client — answers stock quote requests the way the chat bot does.
//!
//! Quotes come from Finnhub and are enriched with the daily change, a
//! reference price over a fixed historical window and a company description
//! from a local pipe-delimited symbol directory.
//!
//! Usage example (CLI):
//! ```bash
//! FINNHUB_API_KEY=... stonks_client --data-path ./stonksdata.txt msft aapl
//! FINNHUB_API_KEY=... stonks_client --data-path ./stonksdata.txt   # interactive
//! ```
//!
//! Without symbols the client reads commands (`quote msft`, `price gme`,
//! `reload`, `refresh`, `help`, `quit`) from stdin. Failing to load the
//! directory at startup is the only fatal error.
#![warn(missing_docs)]
mod args;
mod console;
mod finnhub;
mod model;

use crate::args::Args;
use crate::finnhub::FinnhubProvider;
use clap::Parser;
use log::{error, info, warn};
use stonks_common::{Result, Stonks, StonksError};
use std::io;

fn main() -> Result<(), StonksError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }
    init_logger();
    let args = Args::parse();
    let config = args.to_config()?;

    let provider = FinnhubProvider::new(&config)?;
    let stonks = Stonks::new(provider, &config).inspect_err(|e| {
        error!(
            "Unable to load symbol directory {}: {}",
            config.data_path.display(),
            e
        );
    })?;

    if stonks.directory().is_empty()? {
        warn!("Symbol directory {} is empty", config.data_path.display());
    }

    if !args.symbols.is_empty() {
        for symbol in &args.symbols {
            match stonks.quote(symbol) {
                Ok(detail) if args.json => println!("{}", detail.to_json()?),
                Ok(detail) => println!("{detail}"),
                Err(e) => println!("{symbol}: {e}"),
            }
        }
        return Ok(());
    }

    info!("Client is running. Type 'help' for commands, 'quit' or Ctrl+D to exit.");
    let stdin = io::stdin();
    console::run(&stonks, stdin.lock(), io::stdout().lock())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
