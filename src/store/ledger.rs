use std::fs::OpenOptions;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::CreditEntry;

pub const HEADER: [&str; 4] = ["IMAGE_SLUG", "SOURCE_URL", "AUTHOR", "AUTHOR_URL"];

/// Creates the ledger with its header row unless it already exists.
/// Returns whether a new file was written.
pub fn ensure(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(true)
}

/// Appends one row. The file is opened and closed per call so a crashed run
/// leaves every completed row on disk.
pub fn append(path: &Path, entry: &CreditEntry) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.serialize(entry)?;
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

pub fn read_all(path: &Path) -> Result<Vec<CreditEntry>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for row in rdr.deserialize::<CreditEntry>() {
        entries.push(row?);
    }
    Ok(entries)
}
