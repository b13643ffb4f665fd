//! Line-oriented front end standing in for the chat bot.
//!
//! Each input line is parsed as a `Command` and answered with one reply. A
//! failing request produces an error reply; it never stops the loop.
use std::io::{BufRead, Write};

use log::{error, info, warn};
use stonks_common::command::USAGE;
use stonks_common::{Command, QuoteProvider, Result, Stonks, StonksError};

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Text(String),
    /// Stop reading.
    Quit,
}

/// Answers a single command.
pub fn respond<P: QuoteProvider>(stonks: &Stonks<P>, command: &Command) -> Reply {
    let text = match command {
        Command::Quote(symbol) => stonks
            .quote(symbol)
            .map(|detail| detail.summary)
            .unwrap_or_else(|e| error_reply(&e)),
        Command::Price(symbol) => stonks
            .current_price(symbol)
            .map(|price| format!("{symbol}: {price:.2}"))
            .unwrap_or_else(|e| error_reply(&e)),
        Command::Reload => stonks
            .reload_descriptions()
            .map(|count| format!("Reloaded {count} descriptions"))
            .unwrap_or_else(|e| error_reply(&e)),
        Command::Refresh => stonks
            .refresh_descriptions()
            .map(|count| format!("Refreshed {count} descriptions"))
            .unwrap_or_else(|e| error_reply(&e)),
        Command::Help => USAGE.to_string(),
        Command::Quit => return Reply::Quit,
    };
    Reply::Text(text)
}

fn error_reply(err: &StonksError) -> String {
    if err.is_not_found() {
        warn!("{}", err);
        err.to_string()
    } else {
        error!("Request failed: {}", err);
        format!("error: {err}")
    }
}

/// Reads commands from `input` until EOF or `quit`, writing replies to `output`.
pub fn run<P, R, W>(stonks: &Stonks<P>, input: R, mut output: W) -> Result<()>
where
    P: QuoteProvider,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(command) => respond(stonks, &command),
            Err(e) => Reply::Text(format!("{e}\n{USAGE}")),
        };

        match reply {
            Reply::Text(text) => {
                writeln!(output, "{text}")?;
                output.flush()?;
            }
            Reply::Quit => break,
        }
    }
    info!("Console loop stopping...");
    Ok(())
}
