//! Search error type.

use thiserror::Error;

/// Errors produced by `otto-search`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The candidate set was empty, so no nearest terminal exists.
    #[error("no candidate terminals to search")]
    NotFound,
}
