//! Integer grid coordinates and cube neighborhood sampling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one world region (dimension) of the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DimensionId(pub u16);

impl DimensionId {
    /// The default surface dimension.
    pub const OVERWORLD: Self = Self(0);
    /// The nether, home of fungal trees.
    pub const NETHER: Self = Self(1);
}

/// Address of one unit cube in the block grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (vertical).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position offset by `(dx, dy, dz)`.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Chebyshev distance: the cube radius that contains `other`.
    pub fn chebyshev_distance(self, other: Self) -> i32 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Every position in the cube of side `2 * radius + 1` around `center`,
/// center included.
///
/// Iteration order is fixed: x outermost, then y, then z innermost. A
/// negative radius is treated as zero.
pub fn cube(center: BlockPos, radius: i32) -> impl Iterator<Item = BlockPos> {
    let r = radius.max(0);
    (-r..=r).flat_map(move |dx| {
        (-r..=r).flat_map(move |dy| (-r..=r).map(move |dz| center.offset(dx, dy, dz)))
    })
}
