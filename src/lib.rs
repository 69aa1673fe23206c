//! Plan data extension for GriefPrevention
//!
//! Read-only claim statistics for the analytics host: given a player
//! identifier, report a soft-mute flag, a claim count, a claimed-area total,
//! and a table of claim locations sorted by size. The claim data itself is
//! owned by the host plugin and reached through the [`ClaimRegistry`] seam;
//! this crate never mutates it.
//!
//! ```
//! use griefprevention_extension::{
//!     Claim, GriefPreventionExtension, Location, MemoryClaimRegistry,
//! };
//! use uuid::Uuid;
//!
//! let player = Uuid::new_v4();
//! let mut registry = MemoryClaimRegistry::new();
//! registry.add_claim(Claim::new(player, 100, Location::new(5.0, 64.0, 5.0)));
//!
//! let extension = GriefPreventionExtension::new(Some(registry)).unwrap();
//! let reports = extension.collect(player);
//! assert_eq!(reports.len(), 4);
//! ```

pub mod domain;
pub use domain::{Claim, Location, Row, Table};

/// The seam to the host plugin's claim store.
pub mod registry;
pub use registry::{ClaimRegistry, MemoryClaimRegistry};

/// Per-player claim statistics.
pub mod reporter;
pub use reporter::{ClaimReporter, InitializationError};

/// Provider registration for the analytics host.
pub mod extension;
pub use extension::{
    CallEvent, ExtensionInfo, GriefPreventionExtension, Provider, ProviderDescriptor,
    ProviderKind, ProviderReport, ProviderValue,
};
