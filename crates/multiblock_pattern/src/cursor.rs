//! The world-state cursor predicates look through.
//!
//! One [`BlockWorldState`] is created per match attempt and repositioned for
//! every cell the matcher visits. It also owns the attempt's two contexts so
//! predicates can read the cell and write shared state through one handle.

use std::fmt;

use multiblock_foundation::{BlockPos, BlockState, Facing};
use multiblock_world::{BlockWorld, TileRef};

use crate::context::MatchContext;

/// View of the cell currently being tested.
pub struct BlockWorldState<'w> {
    world: &'w dyn BlockWorld,
    pos: BlockPos,
    state: BlockState,
    /// `None` until the tile at `pos` has been looked up.
    tile: Option<Option<TileRef>>,
    match_context: MatchContext,
    layer_context: MatchContext,
}

impl<'w> BlockWorldState<'w> {
    /// Creates a cursor at `pos` with empty contexts.
    #[must_use]
    pub fn new(world: &'w dyn BlockWorld, pos: BlockPos) -> Self {
        Self {
            world,
            pos,
            state: world.block_state(pos),
            tile: None,
            match_context: MatchContext::new(),
            layer_context: MatchContext::new(),
        }
    }

    /// Moves the cursor to `pos`.
    ///
    /// The cell state is fetched immediately; the tile is forgotten and
    /// fetched again on first use.
    pub fn reposition(&mut self, pos: BlockPos) {
        self.pos = pos;
        self.state = self.world.block_state(pos);
        self.tile = None;
    }

    /// Absolute position of the current cell.
    #[must_use]
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    /// State of the current cell.
    #[must_use]
    pub fn block_state(&self) -> BlockState {
        self.state
    }

    /// State of the neighbor one step towards `facing`, in world axes.
    ///
    /// The cursor does not move. Past the edge of the grid the neighbor
    /// reads as air.
    #[must_use]
    pub fn offset_state(&self, facing: Facing) -> BlockState {
        self.pos
            .checked_offset_by(facing, 1)
            .map_or(BlockState::AIR, |pos| self.world.block_state(pos))
    }

    /// Tile of the current cell, looked up at most once per position.
    pub fn tile(&mut self) -> Option<TileRef> {
        let (world, pos) = (self.world, self.pos);
        self.tile.get_or_insert_with(|| world.tile_at(pos)).clone()
    }

    /// The world being matched against.
    #[must_use]
    pub fn world(&self) -> &'w dyn BlockWorld {
        self.world
    }

    /// Context shared by the whole attempt.
    #[must_use]
    pub fn match_context(&self) -> &MatchContext {
        &self.match_context
    }

    /// Context shared by the whole attempt, mutably.
    pub fn match_context_mut(&mut self) -> &mut MatchContext {
        &mut self.match_context
    }

    /// Context shared by the cells of the current slice.
    #[must_use]
    pub fn layer_context(&self) -> &MatchContext {
        &self.layer_context
    }

    /// Context shared by the cells of the current slice, mutably.
    pub fn layer_context_mut(&mut self) -> &mut MatchContext {
        &mut self.layer_context
    }

    /// Consumes the cursor, handing the global context to the caller.
    #[must_use]
    pub fn into_match_context(self) -> MatchContext {
        self.match_context
    }
}

impl fmt::Debug for BlockWorldState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockWorldState")
            .field("pos", &self.pos)
            .field("state", &self.state)
            .field("tile_fetched", &self.tile.is_some())
            .field("match_context", &self.match_context)
            .field("layer_context", &self.layer_context)
            .finish_non_exhaustive()
    }
}
