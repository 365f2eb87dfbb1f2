//! The `Terminal` record — one physical cash-machine site.

use crate::GeoPoint;

/// A cash-machine terminal: a coordinate plus the address fields shown to
/// the user.
///
/// Terminals are loaded once at startup and never mutated; identity is
/// positional (the dataset carries no unique id).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terminal {
    pub location:    GeoPoint,
    pub address:     String,
    pub postal_code: String,
    pub city:        String,
}

impl Terminal {
    pub fn new(
        location: GeoPoint,
        address: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            location,
            address: address.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} {}", self.address, self.postal_code, self.city)
    }
}
