use crate::models::Error;
use crate::types::{GroupKey, KeyGroup, RecordId};
use crate::utils::open_tsv_reader;

use log::debug;
use std::mem;

pub struct RunGrouperConfig {
    /// When a record's secondary key differs from the previous record's,
    /// append that record's primary key to the run it starts. When disabled,
    /// the record only triggers the flush and its primary key is discarded;
    /// the very first record of the input is likewise used only to seed the
    /// key marker.
    pub capture_run_boundaries: bool,
    /// Flush the in-progress run when input ends. When disabled, the trailing
    /// run is discarded and only runs followed by a key change are emitted.
    pub flush_trailing_run: bool,
}

/// Streaming grouper over records that arrive in contiguous runs of a
/// secondary key. Holds one run's buffer at a time; completed groups
/// accumulate in encounter order.
pub struct RunGrouper<'a> {
    config: &'a RunGrouperConfig,
    prev_key: Option<GroupKey>,
    buffer: Vec<RecordId>,
    groups: Vec<KeyGroup>,
}

impl<'a> RunGrouper<'a> {
    pub fn new(config: &'a RunGrouperConfig) -> Self {
        RunGrouper {
            config,
            prev_key: None,
            buffer: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Stream `primary<TAB>secondary<TAB>...` records from a file into the
    /// grouper. Fields beyond the first two are ignored. Errors if the file
    /// yields no records at all, since there is nothing to seed the key
    /// marker with.
    pub fn process_tsv_file(&mut self, file_path: &str) -> Result<(), Error> {
        let mut reader = open_tsv_reader(file_path)?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;
            let line = record.position().map_or(0, |p| p.line());

            let primary_key = record.get(0).ok_or_else(|| {
                Error::ParserError(format!("Line {}: missing primary key field", line))
            })?;

            let secondary_key = record.get(1).ok_or_else(|| {
                Error::ParserError(format!(
                    "Line {}: expected at least 2 tab-separated fields",
                    line
                ))
            })?;

            self.push(primary_key.to_string(), secondary_key.to_string());
        }

        if self.prev_key.is_none() {
            return Err(Error::ParserError(format!(
                "{} contains no records to group",
                file_path
            )));
        }

        Ok(())
    }

    /// Feed one record. Flushes the current run when the secondary key
    /// changes.
    pub fn push(&mut self, primary_key: RecordId, secondary_key: GroupKey) {
        match &self.prev_key {
            None => {
                // First record seeds the key marker.
                self.prev_key = Some(secondary_key);
                if self.config.capture_run_boundaries {
                    self.buffer.push(primary_key);
                }
            }
            Some(prev) if *prev == secondary_key => {
                self.buffer.push(primary_key);
            }
            Some(_) => {
                let completed_key = self.prev_key.replace(secondary_key).unwrap_or_default();
                let completed_run = mem::take(&mut self.buffer);
                debug!(
                    "flushing run of {} record(s) under key {}",
                    completed_run.len(),
                    completed_key
                );
                self.groups.push((completed_key, completed_run));
                if self.config.capture_run_boundaries {
                    self.buffer.push(primary_key);
                }
            }
        }
    }

    /// Consume the grouper and return the completed groups. Whether the
    /// trailing run is included depends on the configuration.
    pub fn finish(mut self) -> Vec<KeyGroup> {
        if self.config.flush_trailing_run {
            if let Some(prev) = self.prev_key.take() {
                self.groups.push((prev, self.buffer));
            }
        }
        self.groups
    }
}
