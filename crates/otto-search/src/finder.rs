//! Linear nearest-terminal scan.
//!
//! The candidate dataset is small (hundreds of terminals, loaded once and
//! never mutated), so a single O(n) pass beats any spatial index on both
//! simplicity and constant factors.  The scan keeps a running minimum under
//! strict `<` comparison, which makes ties break to the earliest candidate
//! in slice order — a fixed input ordering therefore gives a deterministic
//! result.

use otto_core::{GeoPoint, Terminal};

use crate::SearchError;

/// The nearest terminal to a query point, plus how far away it is.
///
/// Borrows the winning record from the candidate slice; produced fresh on
/// each call and owned by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult<'a> {
    pub terminal:    &'a Terminal,
    pub distance_km: f64,
}

/// Find the candidate terminal closest to `query` under haversine distance.
///
/// Pure and synchronous: no I/O, no mutation, no internal state.  Cost is
/// one distance computation per candidate.  `query` is assumed to hold valid
/// coordinate ranges; out-of-range inputs are the caller's responsibility
/// (the dataset loaders reject them before they get here).
///
/// # Errors
///
/// [`SearchError::NotFound`] if `candidates` is empty.
pub fn find_nearest<'a>(
    query: GeoPoint,
    candidates: &'a [Terminal],
) -> Result<SearchResult<'a>, SearchError> {
    let mut nearest: Option<&'a Terminal> = None;
    let mut min_distance = f64::INFINITY;

    for terminal in candidates {
        let distance = query.distance_km(terminal.location);
        if distance < min_distance {
            nearest = Some(terminal);
            min_distance = distance;
        }
    }

    match nearest {
        Some(terminal) => Ok(SearchResult { terminal, distance_km: min_distance }),
        None => Err(SearchError::NotFound),
    }
}
