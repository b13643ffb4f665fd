//! Symbol directory: ticker symbol → human-readable description.
//!
//! The directory is read from a pipe-delimited file without a header row, one
//! security per line:
//!
//! ```text
//! AAPL|Apple Inc. - Common Stock|Q
//! MSFT|Microsoft Corporation - Common Stock|Q
//! ```
//!
//! Only the first two columns are used. A usable file can be built from the
//! NASDAQ symbol directory:
//!
//! ```bash
//! cat nasdaqlisted.txt otherlisted.txt mfundslist.txt | cut -d "|" -f 1-3 > stonksdata.txt
//! ```
//!
//! Design notes:
//! - Symbols are stored exactly as read; lookups upcase their input, so a
//!   lower-case row in the file is never matched.
//! - When a symbol appears twice the first row wins.
//! - The table sits behind `RwLock<Arc<_>>`. `reload` parses the new file in
//!   full before publishing it with a single assignment, so a reader sees either
//!   the old table or the new one, never a mix. A failed reload leaves the old
//!   table in place.
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use csv::ReaderBuilder;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::StonksError;
use crate::result::Result;

/// Column separator of the directory file.
pub const DELIMITER: u8 = b'|';

/// One row of the directory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Ticker symbol as written in the file.
    pub symbol: String,
    /// Company or fund description.
    pub description: String,
}

type SymbolTable = HashMap<String, String>;

/// Parses directory rows from any reader.
///
/// Returns an error naming the offending line if a row has fewer than two
/// columns or a different column count than the rows before it.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<SymbolRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        match (row.get(0), row.get(1)) {
            (Some(symbol), Some(description)) => records.push(SymbolRecord {
                symbol: symbol.to_string(),
                description: description.to_string(),
            }),
            _ => {
                return Err(StonksError::ParseDirectory(format!(
                    "line {line}: expected SYMBOL|DESCRIPTION, got {} column(s)",
                    row.len()
                )));
            }
        }
    }
    Ok(records)
}

/// Reads and parses a directory file.
pub fn load_records(path: &Path) -> Result<Vec<SymbolRecord>> {
    let file = File::open(path)?;
    parse_records(file)
}

fn index(records: Vec<SymbolRecord>) -> SymbolTable {
    let mut table = SymbolTable::with_capacity(records.len());
    for record in records {
        table.entry(record.symbol).or_insert(record.description);
    }
    table
}

/// In-memory symbol directory backed by a file on disk.
#[derive(Debug)]
pub struct SymbolDirectory {
    path: PathBuf,
    table: RwLock<Arc<SymbolTable>>,
}

impl SymbolDirectory {
    /// Loads the directory from `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = index(load_records(&path)?);
        info!("Loaded {} symbols from {}", table.len(), path.display());
        Ok(Self {
            path,
            table: RwLock::new(Arc::new(table)),
        })
    }

    /// Looks up the description for `symbol`, ignoring case.
    pub fn lookup(&self, symbol: &str) -> Result<String> {
        let upcased = symbol.trim().to_uppercase();
        debug!("Searching for {}", upcased);
        self.snapshot()?
            .get(&upcased)
            .cloned()
            .ok_or(StonksError::SymbolNotFound(upcased))
    }

    /// Re-reads the file and swaps in the new table.
    ///
    /// On failure the current table stays active and the error is returned.
    /// Returns the number of symbols now loaded.
    pub fn reload(&self) -> Result<usize> {
        let table = match load_records(&self.path) {
            Ok(records) => index(records),
            Err(e) => {
                warn!("Unable to reload descriptions from {}: {}", self.path.display(), e);
                return Err(e);
            }
        };
        let count = table.len();
        *self.table.write()? = Arc::new(table);
        info!("Reloaded {} symbols from {}", count, self.path.display());
        Ok(count)
    }

    /// Number of distinct symbols currently loaded.
    pub fn len(&self) -> Result<usize> {
        Ok(self.snapshot()?.len())
    }

    /// `true` if the current table holds no symbols.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// File the directory is loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> Result<Arc<SymbolTable>> {
        Ok(Arc::clone(&*self.table.read()?))
    }
}
