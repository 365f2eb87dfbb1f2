//! CSV dataset loader.
//!
//! # CSV format
//!
//! One row per terminal, header required:
//!
//! ```csv
//! latitude,longitude,address,postal_code,city
//! 60.1699,24.9384,Mannerheimintie 1,00100,Helsinki
//! 60.4518,22.2666,Kauppatori 5,20100,Turku
//! ```

use std::io::Read;
use std::path::Path;

use otto_core::Terminal;

use crate::{DataError, DataResult, TerminalRecord};

/// Load a terminal dataset from a CSV file.
pub fn load_terminals_csv(path: &Path) -> DataResult<Vec<Terminal>> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_terminals_csv_reader(file)
}

/// Like [`load_terminals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_terminals_csv_reader<R: Read>(reader: R) -> DataResult<Vec<Terminal>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut terminals = Vec::new();

    for (i, result) in csv_reader.deserialize::<TerminalRecord>().enumerate() {
        let record = result.map_err(|e| DataError::Parse(e.to_string()))?;
        terminals.push(record.into_terminal(i)?);
    }

    Ok(terminals)
}
