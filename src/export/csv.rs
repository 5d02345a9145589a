use super::model::{EntryExport, HEADERS, entry_to_row};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write the rows as CSV with the `ID,Timestamp,Status,Code,Comment` header.
pub fn write_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(entry_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
