//! Chat-style commands understood by the bot front end.
//!
//! A line looks like `!quote aapl` or `reload`. The leading `!` is optional and
//! keywords are case-insensitive.
use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::error::StonksError;

/// Usage text shown for `help` and after an invalid command.
pub const USAGE: &str = "commands: quote <SYMBOL> | price <SYMBOL> | reload | refresh | help | quit";

/// Command keywords, including aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Keyword {
    /// Full enriched quote.
    #[strum(to_string = "quote", serialize = "q", serialize = "stonks")]
    Quote,
    /// Current price only.
    #[strum(to_string = "price", serialize = "zquote")]
    Price,
    /// Re-read the directory file.
    Reload,
    /// Download a fresh directory file, then reload.
    Refresh,
    /// Show usage.
    Help,
    /// Leave the console loop.
    #[strum(to_string = "quit", serialize = "exit")]
    Quit,
}

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enriched quote for a symbol.
    Quote(String),
    /// Price-only quote for a symbol.
    Price(String),
    /// Reload the directory from disk.
    Reload,
    /// Refresh the directory file and reload it.
    Refresh,
    /// Print usage.
    Help,
    /// Stop reading commands.
    Quit,
}

impl FromStr for Command {
    type Err = StonksError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let line = line.strip_prefix('!').unwrap_or(line);
        let mut words = line.split_whitespace();

        let keyword = words
            .next()
            .ok_or_else(|| StonksError::InvalidCommand(String::from("empty command")))?;
        let keyword = Keyword::from_str(keyword)
            .map_err(|_| StonksError::InvalidCommand(format!("unknown command '{keyword}'")))?;

        let command = match keyword {
            Keyword::Quote | Keyword::Price => {
                let symbol = words.next().ok_or_else(|| {
                    StonksError::InvalidCommand(format!("'{keyword}' needs a symbol"))
                })?;
                let symbol = symbol.to_uppercase();
                if keyword == Keyword::Quote {
                    Command::Quote(symbol)
                } else {
                    Command::Price(symbol)
                }
            }
            Keyword::Reload => Command::Reload,
            Keyword::Refresh => Command::Refresh,
            Keyword::Help => Command::Help,
            Keyword::Quit => Command::Quit,
        };

        if let Some(extra) = words.next() {
            return Err(StonksError::InvalidCommand(format!(
                "unexpected argument '{extra}' for '{keyword}'"
            )));
        }
        Ok(command)
    }
}
