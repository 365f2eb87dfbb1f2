//! Data-layer error type.

use thiserror::Error;

/// Errors produced by `otto-data`.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("record {record}: coordinate ({lat}, {lon}) out of range")]
    OutOfRange { record: usize, lat: f64, lon: f64 },
}

pub type DataResult<T> = Result<T, DataError>;
