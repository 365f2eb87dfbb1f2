//! `otto-search` — nearest-terminal search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`finder`] | `find_nearest`, `SearchResult`                |
//! | [`error`]  | `SearchError`                                 |

pub mod error;
pub mod finder;


pub use error::SearchError;
pub use finder::{SearchResult, find_nearest};
