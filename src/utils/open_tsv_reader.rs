use crate::models::Error;
use csv::{ReaderBuilder, Trim};
use std::fs::File;

/// Open a raw tab-separated file for record streaming.
///
/// Headerless, quoting disabled, surrounding whitespace trimmed from every
/// field, and variable field counts allowed (callers validate the fields they
/// need). Fully blank lines are skipped by the reader.
pub fn open_tsv_reader(file_path: &str) -> Result<csv::Reader<File>, Error> {
    let file = File::open(file_path)?;

    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(file))
}
