//! Integer grid positions.

use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::facing::Facing;

/// A position (or offset) in the voxel grid.
///
/// `y` is the vertical axis. `x` grows towards east and `z` towards south.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockPos {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the neighboring position one step towards `facing`.
    #[must_use]
    pub const fn offset(self, facing: Facing) -> Self {
        self.offset_by(facing, 1)
    }

    /// Returns the position `n` steps towards `facing`.
    ///
    /// Overflows like integer addition; see [`checked_offset_by`](Self::checked_offset_by).
    #[must_use]
    pub const fn offset_by(self, facing: Facing, n: i32) -> Self {
        let [dx, dy, dz] = facing.unit();
        Self::new(self.x + dx * n, self.y + dy * n, self.z + dz * n)
    }

    /// Returns the position `n` steps towards `facing`, or `None` if it
    /// lies outside the `i32` grid.
    #[must_use]
    pub const fn checked_offset_by(self, facing: Facing, n: i32) -> Option<Self> {
        let [dx, dy, dz] = facing.unit();
        match (dx.checked_mul(n), dy.checked_mul(n), dz.checked_mul(n)) {
            (Some(dx), Some(dy), Some(dz)) => self.checked_add(Self::new(dx, dy, dz)),
            _ => None,
        }
    }

    /// Component-wise addition, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (
            self.x.checked_add(rhs.x),
            self.y.checked_add(rhs.y),
            self.z.checked_add(rhs.z),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// Returns the components as an array `[x, y, z]`.
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for BlockPos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for BlockPos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for BlockPos {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Debug for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockPos({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
