//! Persistent in-memory voxel world.
//!
//! `GridWorld` stores only cells that differ from its default state. It uses
//! persistent maps for O(1) cloning and structural sharing, so building a
//! variant of a world (one block changed) does not copy the whole grid.

use std::fmt;

use multiblock_foundation::{BlockPos, BlockState};

use crate::query::BlockWorld;
use crate::tile::TileRef;

/// Immutable-by-default voxel world.
///
/// The `with_*` methods return a new `GridWorld`; the `set_*` methods mutate
/// in place for bulk construction.
#[derive(Clone, Default)]
pub struct GridWorld {
    /// Cells that differ from `default_state`.
    blocks: im::HashMap<BlockPos, BlockState>,
    /// Tiles by position.
    tiles: im::HashMap<BlockPos, TileRef>,
    /// State reported for unset cells.
    default_state: BlockState,
}

impl GridWorld {
    /// Creates an empty world filled with air.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world where every unset cell reads as `state`.
    #[must_use]
    pub fn filled_with(state: BlockState) -> Self {
        Self {
            default_state: state,
            ..Self::default()
        }
    }

    /// State reported for unset cells.
    #[must_use]
    pub fn default_state(&self) -> BlockState {
        self.default_state
    }

    // =========================================================================
    // In-place mutation
    // =========================================================================

    /// Sets the state at `pos`.
    pub fn set_block(&mut self, pos: BlockPos, state: BlockState) {
        if state == self.default_state {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Sets every cell in the box spanned by `a` and `b` (inclusive).
    pub fn fill(&mut self, a: BlockPos, b: BlockPos, state: BlockState) {
        let (lo, hi) = (
            BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        );
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    self.set_block(BlockPos::new(x, y, z), state);
                }
            }
        }
    }

    /// Attaches a tile at `pos`, replacing any previous one.
    pub fn set_tile(&mut self, pos: BlockPos, tile: TileRef) {
        self.tiles.insert(pos, tile);
    }

    /// Removes the tile at `pos`.
    pub fn remove_tile(&mut self, pos: BlockPos) -> Option<TileRef> {
        self.tiles.remove(&pos)
    }

    // =========================================================================
    // Persistent updates
    // =========================================================================

    /// Returns a world with the state at `pos` replaced.
    #[must_use]
    pub fn with_block(&self, pos: BlockPos, state: BlockState) -> Self {
        let mut next = self.clone();
        next.set_block(pos, state);
        next
    }

    /// Returns a world with the box spanned by `a` and `b` filled.
    #[must_use]
    pub fn with_fill(&self, a: BlockPos, b: BlockPos, state: BlockState) -> Self {
        let mut next = self.clone();
        next.fill(a, b, state);
        next
    }

    /// Returns a world with a block and a tile placed at `pos`.
    #[must_use]
    pub fn with_tile(&self, pos: BlockPos, state: BlockState, tile: TileRef) -> Self {
        let mut next = self.clone();
        next.set_block(pos, state);
        next.set_tile(pos, tile);
        next
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Number of cells that differ from the default state.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterates over cells that differ from the default state, in no particular order.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockPos, BlockState)> + '_ {
        self.blocks.iter().map(|(pos, state)| (*pos, *state))
    }

    /// Returns the smallest box containing every explicitly set cell.
    #[must_use]
    pub fn bounds(&self) -> Option<(BlockPos, BlockPos)> {
        let mut positions = self.blocks.keys();
        let first = *positions.next()?;
        Some(positions.fold((first, first), |(lo, hi), p| {
            (
                BlockPos::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                BlockPos::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }
}

impl BlockWorld for GridWorld {
    fn block_state(&self, pos: BlockPos) -> BlockState {
        self.blocks
            .get(&pos)
            .copied()
            .unwrap_or(self.default_state)
    }

    fn tile_at(&self, pos: BlockPos) -> Option<TileRef> {
        self.tiles.get(&pos).cloned()
    }
}

impl fmt::Debug for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridWorld")
            .field("blocks", &self.blocks.len())
            .field("tiles", &self.tiles.len())
            .field("default_state", &self.default_state)
            .finish()
    }
}
