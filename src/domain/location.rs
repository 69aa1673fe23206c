/// A point in a world, with full-precision coordinates.
///
/// Claim boundaries are stored at entity precision, but claim reporting only
/// ever deals in block coordinates, obtained by flooring each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    x: f64,
    y: f64,
    z: f64,
}

impl Location {
    /// Creates a location from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The X coordinate of the block containing this location.
    ///
    /// Block coordinates are obtained by flooring, so `-0.5` lies in
    /// block `-1`.
    #[must_use]
    pub fn block_x(&self) -> i32 {
        self.x.floor() as i32
    }

    /// The Y coordinate of the block containing this location.
    #[must_use]
    pub fn block_y(&self) -> i32 {
        self.y.floor() as i32
    }

    /// The Z coordinate of the block containing this location.
    #[must_use]
    pub fn block_z(&self) -> i32 {
        self.z.floor() as i32
    }
}
