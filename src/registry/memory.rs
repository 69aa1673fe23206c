use std::collections::HashSet;

use uuid::Uuid;

use crate::{domain::Claim, registry::ClaimRegistry};

/// An in-memory claim store.
///
/// Claims keep their insertion order. Removing a claim leaves a vacant slot
/// rather than shifting later claims, so slot indices stay stable for the
/// lifetime of the store.
#[derive(Debug, Default)]
pub struct MemoryClaimRegistry {
    claims: Vec<Option<Claim>>,
    soft_muted: HashSet<Uuid>,
}

impl MemoryClaimRegistry {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a claim, returning its slot index.
    pub fn add_claim(&mut self, claim: Claim) -> usize {
        self.claims.push(Some(claim));
        self.claims.len() - 1
    }

    /// Removes the claim at the given slot, leaving the slot vacant.
    ///
    /// Returns the removed claim, or `None` if the slot was already vacant
    /// or out of range.
    pub fn remove_claim(&mut self, slot: usize) -> Option<Claim> {
        self.claims.get_mut(slot)?.take()
    }

    /// Sets or clears a player's soft-mute flag.
    pub fn set_soft_muted(&mut self, player: Uuid, muted: bool) {
        if muted {
            self.soft_muted.insert(player);
        } else {
            self.soft_muted.remove(&player);
        }
    }
}

impl ClaimRegistry for MemoryClaimRegistry {
    fn claims(&self) -> &[Option<Claim>] {
        &self.claims
    }

    fn is_soft_muted(&self, player: Uuid) -> bool {
        self.soft_muted.contains(&player)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::MemoryClaimRegistry;
    use crate::{
        domain::{Claim, Location},
        registry::ClaimRegistry,
    };

    #[test]
    fn removal_leaves_a_vacant_slot() {
        let owner = Uuid::new_v4();
        let mut registry = MemoryClaimRegistry::new();
        registry.add_claim(Claim::new(owner, 50, Location::new(0.0, 64.0, 0.0)));
        let slot = registry.add_claim(Claim::new(owner, 100, Location::new(5.0, 64.0, 5.0)));
        registry.add_claim(Claim::new(owner, 30, Location::new(9.0, 64.0, 9.0)));

        let removed = registry.remove_claim(slot).unwrap();
        assert_eq!(removed.area(), 100);

        assert_eq!(registry.claims().len(), 3);
        assert!(registry.claims()[slot].is_none());
    }

    #[test]
    fn removing_a_vacant_or_out_of_range_slot_is_a_no_op() {
        let mut registry = MemoryClaimRegistry::new();
        let slot = registry.add_claim(Claim::administrative(10, Location::new(0.0, 64.0, 0.0)));

        assert!(registry.remove_claim(slot).is_some());
        assert!(registry.remove_claim(slot).is_none());
        assert!(registry.remove_claim(99).is_none());
    }

    #[test]
    fn soft_mute_flag_round_trips() {
        let player = Uuid::new_v4();
        let mut registry = MemoryClaimRegistry::new();
        assert!(!registry.is_soft_muted(player));

        registry.set_soft_muted(player, true);
        assert!(registry.is_soft_muted(player));

        registry.set_soft_muted(player, false);
        assert!(!registry.is_soft_muted(player));
    }
}
