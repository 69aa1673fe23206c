//! The seam to the host plugin's claim store.
//!
//! The claim registry is owned entirely by the host; this crate holds a
//! registry by value or reference, reads from it, and never mutates it.
//! [`MemoryClaimRegistry`] is a reference implementation matching the host
//! plugin's in-memory data store, and is what the tests run against.

use uuid::Uuid;

use crate::domain::Claim;

mod memory;
pub use memory::MemoryClaimRegistry;

/// Read access to the claims and mute flags held by the host plugin.
pub trait ClaimRegistry {
    /// All claim slots, in insertion order.
    ///
    /// A slot is `None` where a claim has been deleted; callers must skip
    /// vacant slots.
    fn claims(&self) -> &[Option<Claim>];

    /// Whether the player's chat messages are hidden from others while
    /// still shown to the player themselves.
    fn is_soft_muted(&self, player: Uuid) -> bool;
}

impl<R: ClaimRegistry + ?Sized> ClaimRegistry for &R {
    fn claims(&self) -> &[Option<Claim>] {
        (**self).claims()
    }

    fn is_soft_muted(&self, player: Uuid) -> bool {
        (**self).is_soft_muted(player)
    }
}
