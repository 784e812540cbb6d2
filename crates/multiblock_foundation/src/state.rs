//! Observable cell state.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a block type.
///
/// Ids are handed out by a block registry. Id `0` is reserved for air.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockId(pub u32);

impl BlockId {
    /// The reserved air block.
    pub const AIR: BlockId = BlockId(0);

    /// Returns the raw index of this block id.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

/// The state of a single grid cell: a block type plus a variant.
///
/// `meta` distinguishes variants of one block type (orientation, tier, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockState {
    /// Block type.
    pub block: BlockId,
    /// Variant of the block type.
    pub meta: u16,
}

impl BlockState {
    /// The empty cell.
    pub const AIR: BlockState = BlockState::new(BlockId::AIR, 0);

    /// Creates a new block state.
    #[must_use]
    pub const fn new(block: BlockId, meta: u16) -> Self {
        Self { block, meta }
    }

    /// Creates the default variant of a block type.
    #[must_use]
    pub const fn of(block: BlockId) -> Self {
        Self::new(block, 0)
    }

    /// Returns true if this is air.
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.block.0 == BlockId::AIR.0
    }

    /// Returns this state with a different variant.
    #[must_use]
    pub const fn with_meta(self, meta: u16) -> Self {
        Self::new(self.block, meta)
    }
}

impl From<BlockId> for BlockState {
    fn from(block: BlockId) -> Self {
        Self::of(block)
    }
}

impl fmt::Debug for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_air() {
            write!(f, "BlockState(air)")
        } else {
            write!(f, "BlockState({}:{})", self.block.0, self.meta)
        }
    }
}
