//! Domain models for claim reporting.
//!
//! This module contains the core value types: claims, locations, and the
//! two-column table delivered to the reporting sink.

/// Claim record consumed from the host plugin's data store.
pub mod claim;
pub use claim::Claim;

/// Locations and block-coordinate truncation.
pub mod location;
pub use location::Location;

/// Two-column table structure for the claim listing.
pub mod table;
pub use table::{Row, Table, TableBuilder};
