//! JSON dataset loader.
//!
//! # JSON format
//!
//! A top-level array of terminal records, camelCase field names:
//!
//! ```json
//! [
//!   {
//!     "latitude": 60.1699,
//!     "longitude": 24.9384,
//!     "address": "Mannerheimintie 1",
//!     "postalCode": "00100",
//!     "city": "Helsinki"
//!   }
//! ]
//! ```

use std::io::Read;
use std::path::Path;

use otto_core::Terminal;

use crate::{DataError, DataResult, TerminalRecord};

/// Load a terminal dataset from a JSON file.
pub fn load_terminals_json(path: &Path) -> DataResult<Vec<Terminal>> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_terminals_json_reader(std::io::BufReader::new(file))
}

/// Like [`load_terminals_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_terminals_json_reader<R: Read>(reader: R) -> DataResult<Vec<Terminal>> {
    let records: Vec<TerminalRecord> =
        serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_terminal(i))
        .collect()
}
