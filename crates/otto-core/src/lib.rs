//! `otto-core` — foundational types for the otto terminal locator.
//!
//! This crate is a dependency of every other `otto-*` crate.  It has no
//! `otto-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance            |
//! | [`terminal`] | `Terminal` cash-machine record            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod geo;
pub mod terminal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use terminal::Terminal;
