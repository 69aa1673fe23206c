use uuid::Uuid;

use crate::domain::Location;

/// A player-owned, area-bounded region record.
///
/// Claims are owned by the host plugin's data store; this crate only ever
/// reads them. Administrative claims have no owner and are never attributed
/// to any player.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// The owning player, or `None` for an administrative claim.
    owner: Option<Uuid>,

    /// The claimed area, in blocks.
    area: u32,

    /// The corner of the claim with the greatest X and Z coordinates.
    greater_boundary_corner: Location,
}

impl Claim {
    /// Creates a claim owned by the given player.
    #[must_use]
    pub const fn new(owner: Uuid, area: u32, greater_boundary_corner: Location) -> Self {
        Self {
            owner: Some(owner),
            area,
            greater_boundary_corner,
        }
    }

    /// Creates an administrative claim, which has no owner.
    #[must_use]
    pub const fn administrative(area: u32, greater_boundary_corner: Location) -> Self {
        Self {
            owner: None,
            area,
            greater_boundary_corner,
        }
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<Uuid> {
        self.owner
    }

    /// Whether this claim is owned by the given player.
    ///
    /// Administrative claims belong to nobody.
    #[must_use]
    pub fn is_owned_by(&self, player: Uuid) -> bool {
        self.owner == Some(player)
    }

    /// The claimed area, in blocks.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.area
    }

    /// The corner of the claim with the greatest X and Z coordinates.
    #[must_use]
    pub const fn greater_boundary_corner(&self) -> &Location {
        &self.greater_boundary_corner
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::Claim;
    use crate::domain::Location;

    #[test]
    fn owned_claim_matches_its_owner_only() {
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let claim = Claim::new(owner, 100, Location::new(5.0, 64.0, 5.0));

        assert!(claim.is_owned_by(owner));
        assert!(!claim.is_owned_by(other));
    }

    #[test]
    fn administrative_claim_matches_nobody() {
        let claim = Claim::administrative(100, Location::new(5.0, 64.0, 5.0));

        assert_eq!(claim.owner(), None);
        assert!(!claim.is_owned_by(Uuid::new_v4()));
    }
}
