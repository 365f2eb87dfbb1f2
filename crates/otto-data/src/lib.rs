//! `otto-data` — terminal dataset loading.
//!
//! The search core takes its candidate list as a parameter; this crate is
//! where that list comes from.  Datasets are loaded once at startup and the
//! resulting `Vec<Terminal>` is treated as read-only for the life of the
//! process.
//!
//! # Crate layout
//!
//! | Module   | Contents                                         |
//! |----------|--------------------------------------------------|
//! | [`json`] | `load_terminals_json` (+ reader variant)         |
//! | [`csv`]  | `load_terminals_csv` (+ reader variant)          |
//! | [`error`]| `DataError`, `DataResult<T>`                     |
//!
//! Both loaders reject records whose coordinates fall outside the valid
//! latitude/longitude ranges; a malformed dataset fails at load time, never
//! inside a search.

pub mod csv;
pub mod error;
pub mod json;


pub use csv::{load_terminals_csv, load_terminals_csv_reader};
pub use error::{DataError, DataResult};
pub use json::{load_terminals_json, load_terminals_json_reader};

use otto_core::{GeoPoint, Terminal};

/// Raw dataset record as it appears on the wire.
///
/// The JSON dataset uses camelCase field names (`postalCode`); CSV headers
/// conventionally use snake_case, so that spelling is accepted as an alias.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TerminalRecord {
    latitude:    f64,
    longitude:   f64,
    address:     String,
    #[serde(alias = "postal_code")]
    postal_code: String,
    city:        String,
}

impl TerminalRecord {
    /// Validate coordinate ranges and convert into a domain `Terminal`.
    ///
    /// `index` is the zero-based record position, reported on rejection.
    pub(crate) fn into_terminal(self, index: usize) -> DataResult<Terminal> {
        let location = GeoPoint::new(self.latitude, self.longitude);
        if !location.is_valid() {
            return Err(DataError::OutOfRange {
                record: index,
                lat:    self.latitude,
                lon:    self.longitude,
            });
        }
        Ok(Terminal::new(location, self.address, self.postal_code, self.city))
    }
}
