use crate::models::Error;
use crate::types::{IntegerSet, RecordSetMap};
use crate::utils::open_tsv_reader;
use log::debug;

/// Load `identifier<TAB>int,int,...` lines into a `RecordSetMap`.
///
/// The whole mapping is materialized before any pairwise computation can
/// begin, since pairing needs the complete key set. A repeated identifier
/// replaces the earlier set but keeps its original position in the map.
pub fn read_record_sets_from_path(file_path: &str) -> Result<RecordSetMap, Error> {
    let mut reader = open_tsv_reader(file_path)?;
    let mut record_sets = RecordSetMap::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;
        let line = record.position().map_or(0, |p| p.line());

        let identifier = record
            .get(0)
            .ok_or_else(|| Error::ParserError(format!("Line {}: missing identifier field", line)))?;

        let values_field = record.get(1).ok_or_else(|| {
            Error::ParserError(format!(
                "Line {}: expected at least 2 tab-separated fields",
                line
            ))
        })?;

        let values = values_field
            .split(',')
            .map(|token| {
                token.trim().parse::<i64>().map_err(|_| {
                    Error::ParserError(format!(
                        "Line {}: invalid integer token {:?}",
                        line, token
                    ))
                })
            })
            .collect::<Result<IntegerSet, Error>>()?;

        record_sets.insert(identifier.to_string(), values);
    }

    debug!(
        "loaded {} record set(s) from {}",
        record_sets.len(),
        file_path
    );

    Ok(record_sets)
}
