//! The append-only event log file.

use crate::core::tail::tail_lines;
use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle on the tab-separated event log. Holds only the path; the file is
/// opened and closed on every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty log file if they are missing.
    pub fn ensure(&self) -> AppResult<()> {
        self.ensure_dir()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(())
    }

    fn ensure_dir(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Append one record as a single line.
    ///
    /// The whole line, newline included, is handed to one `write_all` on a
    /// file opened in append mode.
    pub fn append(&self, record: &EventRecord) -> AppResult<()> {
        let line = encode_line(record)?;

        self.ensure_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;

        info!(
            path = %self.path.display(),
            chat_id = %record.chat_id,
            name = %record.name,
            kite = %record.kite,
            "event recorded"
        );
        Ok(())
    }

    /// The last `n` records, oldest first. A missing log yields no records.
    pub fn tail(&self, n: usize) -> AppResult<Vec<EventRecord>> {
        let lines = tail_lines(&self.path, n)?;
        debug!(
            path = %self.path.display(),
            requested = n,
            found = lines.len(),
            "log tail read"
        );

        Ok(lines.iter().map(|l| EventRecord::from_line(l)).collect())
    }
}

/// Serialize a record as `f1\tf2\t...\tf7\n`, unquoted.
pub fn encode_line(record: &EventRecord) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.serialize(record)?;
    wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))
}
