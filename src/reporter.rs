//! Read-only claim statistics for a single player.
//!
//! The [`ClaimReporter`] wraps the host plugin's claim registry and derives
//! per-player views from it: a soft-mute flag, a claim count, a claimed-area
//! total, and a sorted table of claim locations. Every operation is a pure
//! read over data already resident in the registry.

use uuid::Uuid;

use crate::{
    domain::{Claim, Location, Table},
    registry::ClaimRegistry,
};

/// The claim registry was unavailable when the reporter was constructed.
///
/// This is fatal: without a registry there is nothing to report, and there
/// is no retry or fallback.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("claim registry is unavailable")]
pub struct InitializationError;

/// Derives read-only claim statistics from an externally-owned registry.
///
/// The registry reference is acquired once at construction and never
/// mutated. All operations are synchronous and idempotent for unchanged
/// registry state.
#[derive(Debug)]
pub struct ClaimReporter<R> {
    registry: R,
}

impl<R: ClaimRegistry> ClaimReporter<R> {
    /// Creates a reporter over the registry provided by the host wiring.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] if the host could not supply a
    /// registry. The reporter cannot operate without one.
    pub fn new(registry: Option<R>) -> Result<Self, InitializationError> {
        let registry = registry.ok_or(InitializationError)?;
        Ok(Self { registry })
    }

    /// Whether the player's messages are muted for others, but shown to
    /// them.
    ///
    /// Delegates directly to the registry.
    #[must_use]
    pub fn is_soft_muted(&self, player: Uuid) -> bool {
        self.registry.is_soft_muted(player)
    }

    /// How many claims the player has.
    #[must_use]
    pub fn claim_count(&self, player: Uuid) -> u64 {
        self.claims_of(player).count() as u64
    }

    /// How large an area the player has claimed, in blocks.
    ///
    /// Zero when the player has no claims. Areas are accumulated in 64 bits
    /// so realistic claim counts cannot overflow.
    #[must_use]
    pub fn claimed_area(&self, player: Uuid) -> u64 {
        self.claims_of(player).map(|claim| u64::from(claim.area())).sum()
    }

    /// The player's claims as a two-column table, largest area first.
    ///
    /// Each row pairs the formatted block coordinates of the claim's
    /// greater boundary corner with the claim's area. Claims with equal
    /// areas keep their registry order.
    #[must_use]
    pub fn claim_table(&self, player: Uuid) -> Table {
        let mut claims: Vec<&Claim> = self.claims_of(player).collect();
        // sort_by is stable, so ties keep registry order
        claims.sort_by(|one, two| two.area().cmp(&one.area()));

        tracing::debug!("claim table for {player} has {} rows", claims.len());

        let mut table = Table::builder().column_one("Claim").column_two("Area");
        for claim in claims {
            table = table.row(
                format_location(claim.greater_boundary_corner()),
                u64::from(claim.area()),
            );
        }
        table.build()
    }

    /// The player's claims: present slots whose owner is exactly `player`.
    fn claims_of(&self, player: Uuid) -> impl Iterator<Item = &Claim> {
        self.registry
            .claims()
            .iter()
            .filter_map(Option::as_ref)
            .filter(move |claim| claim.is_owned_by(player))
    }
}

fn format_location(corner: &Location) -> String {
    format!("x: {} z: {}", corner.block_x(), corner.block_z())
}
