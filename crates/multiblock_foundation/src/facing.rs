//! World directions, runtime orientations, and the pattern-to-world transform.
//!
//! A pattern is authored in its own (column, row, aisle) frame. Each of those
//! axes is given a [`RelativeDirection`] role once, when the pattern is built.
//! At match time an [`Orientation`] turns each role into an absolute
//! [`Facing`], which is all the matcher needs to place a cell in the world.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::pos::BlockPos;

/// A world axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// East-west.
    X,
    /// Vertical.
    Y,
    /// North-south.
    Z,
}

// =============================================================================
// Facing
// =============================================================================

/// One of the six absolute world directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Facing {
    /// Negative y.
    Down,
    /// Positive y.
    Up,
    /// Negative z.
    North,
    /// Positive z.
    South,
    /// Negative x.
    West,
    /// Positive x.
    East,
}

impl Facing {
    /// All facings, vertical first.
    pub const ALL: [Facing; 6] = [
        Facing::Down,
        Facing::Up,
        Facing::North,
        Facing::South,
        Facing::West,
        Facing::East,
    ];

    /// Returns the facing pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Rotates 90° clockwise around the vertical axis, seen from above.
    ///
    /// Vertical facings are unchanged.
    #[must_use]
    pub const fn rotate_y(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::Up | Self::Down => self,
        }
    }

    /// Rotates 90° counter-clockwise around the vertical axis, seen from above.
    ///
    /// Vertical facings are unchanged.
    #[must_use]
    pub const fn rotate_y_ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
            Self::Up | Self::Down => self,
        }
    }

    /// Returns the world axis this facing lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Returns true for `Up` and `Down`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }

    /// Unit step `[dx, dy, dz]` for this facing.
    #[inline]
    #[must_use]
    pub const fn unit(self) -> [i32; 3] {
        match self {
            Self::Down => [0, -1, 0],
            Self::Up => [0, 1, 0],
            Self::North => [0, 0, -1],
            Self::South => [0, 0, 1],
            Self::West => [-1, 0, 0],
            Self::East => [1, 0, 0],
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// The horizontal direction a structure faces at match time.
///
/// Only horizontal facings make sense as orientations: `Left` and `Right`
/// are undefined for a structure facing straight up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Facing negative z.
    North,
    /// Facing positive x.
    East,
    /// Facing positive z.
    South,
    /// Facing negative x.
    West,
}

impl Orientation {
    /// All orientations in clockwise order starting at north.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Returns the absolute facing of this orientation.
    #[must_use]
    pub const fn facing(self) -> Facing {
        match self {
            Self::North => Facing::North,
            Self::East => Facing::East,
            Self::South => Facing::South,
            Self::West => Facing::West,
        }
    }

    /// Rotates 90° clockwise, seen from above.
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotates 90° counter-clockwise, seen from above.
    #[must_use]
    pub const fn rotate_ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }
}

impl TryFrom<Facing> for Orientation {
    type Error = Facing;

    fn try_from(facing: Facing) -> std::result::Result<Self, Facing> {
        match facing {
            Facing::North => Ok(Self::North),
            Facing::East => Ok(Self::East),
            Facing::South => Ok(Self::South),
            Facing::West => Ok(Self::West),
            Facing::Up | Facing::Down => Err(facing),
        }
    }
}

impl From<Orientation> for Facing {
    fn from(orientation: Orientation) -> Self {
        orientation.facing()
    }
}

// =============================================================================
// Relative Direction
// =============================================================================

/// Role of a pattern axis, relative to the structure's orientation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelativeDirection {
    /// Always world up.
    Up,
    /// Always world down.
    Down,
    /// The orientation rotated counter-clockwise.
    Left,
    /// The orientation rotated clockwise.
    Right,
    /// The orientation itself.
    Front,
    /// Opposite of the orientation.
    Back,
}

impl RelativeDirection {
    /// Resolves this role to an absolute facing for the given orientation.
    ///
    /// `Up` and `Down` ignore the orientation.
    #[must_use]
    pub const fn actual_facing(self, orientation: Orientation) -> Facing {
        let front = orientation.facing();
        match self {
            Self::Up => Facing::Up,
            Self::Down => Facing::Down,
            Self::Left => front.rotate_y_ccw(),
            Self::Right => front.rotate_y(),
            Self::Front => front,
            Self::Back => front.opposite(),
        }
    }

    /// Returns the role pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    // Roles on one line (up/down, left/right, front/back) resolve to the same
    // world axis for every orientation.
    const fn line(self) -> u8 {
        match self {
            Self::Up | Self::Down => 0,
            Self::Left | Self::Right => 1,
            Self::Front | Self::Back => 2,
        }
    }
}

// =============================================================================
// Structure Axes
// =============================================================================

/// Assignment of a relative role to each pattern axis.
///
/// The column axis runs along a row of a slice, the row axis across rows of
/// a slice, and the aisle axis from one slice to the next.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureAxes {
    column: RelativeDirection,
    row: RelativeDirection,
    aisle: RelativeDirection,
}

impl StructureAxes {
    /// Creates an axis assignment.
    ///
    /// # Errors
    /// Returns [`ErrorKind::DegenerateAxes`] if two roles lie on the same line.
    pub fn new(
        column: RelativeDirection,
        row: RelativeDirection,
        aisle: RelativeDirection,
    ) -> Result<Self> {
        let pairs = [(column, row), (column, aisle), (row, aisle)];
        for (first, second) in pairs {
            if first.line() == second.line() {
                return Err(Error::new(ErrorKind::DegenerateAxes { first, second }));
            }
        }
        Ok(Self { column, row, aisle })
    }

    /// Role of the column axis.
    #[must_use]
    pub const fn column(&self) -> RelativeDirection {
        self.column
    }

    /// Role of the row axis.
    #[must_use]
    pub const fn row(&self) -> RelativeDirection {
        self.row
    }

    /// Role of the aisle axis.
    #[must_use]
    pub const fn aisle(&self) -> RelativeDirection {
        self.aisle
    }

    /// Maps a pattern-local offset to a world offset.
    ///
    /// `x`, `y`, and `z` are the column, row, and aisle offsets from the
    /// pattern center.
    #[inline]
    #[must_use]
    pub const fn transform(&self, x: i32, y: i32, z: i32, orientation: Orientation) -> BlockPos {
        BlockPos::ORIGIN
            .offset_by(self.column.actual_facing(orientation), x)
            .offset_by(self.row.actual_facing(orientation), y)
            .offset_by(self.aisle.actual_facing(orientation), z)
    }
}

impl Default for StructureAxes {
    /// Columns run left, rows run up, aisles run towards the front.
    fn default() -> Self {
        Self {
            column: RelativeDirection::Left,
            row: RelativeDirection::Up,
            aisle: RelativeDirection::Front,
        }
    }
}
