//! Append-only CSV log writer.

use crate::record::LogRecord;
use crate::{LogError, LogResult};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// CSV column order, matching [`LogRecord`] field order.
pub const COLUMNS: [&str; 7] = [
    "timestamp",
    "temperature_c",
    "air_humidity_pct",
    "soil_moisture_pct",
    "luminosity_lux",
    "fan_state",
    "humidifier_state",
];

/// Writer for the persistent log file.
///
/// The header row is written exactly once, when the file is first created;
/// every later flush appends data rows only. This process is the sole
/// writer of the file.
#[derive(Debug, Clone)]
pub struct CsvLogWriter {
    path: PathBuf,
}

impl CsvLogWriter {
    /// Create a writer targeting `<dir>/<filename>`, creating the directory
    /// if needed (recursive, idempotent). The file itself is created lazily
    /// on the first flush.
    pub fn new(dir: &Path, filename: &str) -> LogResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(filename),
        })
    }

    /// Full path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log file currently exists on disk.
    pub fn is_log_present(&self) -> bool {
        self.path.exists()
    }

    /// Durably append every record, in order.
    ///
    /// Creates the file and writes the header row first if the file does
    /// not yet exist. The caller clears its buffer after a successful
    /// return; on error nothing is retried and the error propagates.
    pub fn flush(&self, records: &[LogRecord]) -> LogResult<()> {
        let new_file = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if new_file {
            writer.write_record(COLUMNS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read the persisted file back into records.
    ///
    /// Used by the CLI summary command and by tests; the running loop never
    /// reads its own log.
    pub fn read_back(&self) -> LogResult<Vec<LogRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        reader
            .deserialize()
            .collect::<Result<Vec<LogRecord>, csv::Error>>()
            .map_err(LogError::from)
    }
}
