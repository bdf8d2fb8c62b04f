//! gh-log: durable CSV log of readings and actuator states.

pub mod record;
pub mod writer;

pub use record::{LogRecord, SwitchState, TIMESTAMP_FORMAT};
pub use writer::{COLUMNS, CsvLogWriter};

pub type LogResult<T> = Result<T, LogError>;

#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
