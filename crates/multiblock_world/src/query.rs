//! The read-only world query interface.

use std::sync::Arc;

use multiblock_foundation::{BlockPos, BlockState};

use crate::tile::TileRef;

/// Read-only access to a voxel world.
///
/// Implementations must answer consistently for the duration of one match
/// attempt: the matcher may query the same position several times and
/// assumes the answers agree.
pub trait BlockWorld {
    /// Returns the state of the cell at `pos`.
    fn block_state(&self, pos: BlockPos) -> BlockState;

    /// Returns the tile at `pos`, if any.
    fn tile_at(&self, pos: BlockPos) -> Option<TileRef>;
}

impl<W: BlockWorld + ?Sized> BlockWorld for &W {
    fn block_state(&self, pos: BlockPos) -> BlockState {
        (**self).block_state(pos)
    }

    fn tile_at(&self, pos: BlockPos) -> Option<TileRef> {
        (**self).tile_at(pos)
    }
}

impl<W: BlockWorld + ?Sized> BlockWorld for Arc<W> {
    fn block_state(&self, pos: BlockPos) -> BlockState {
        (**self).block_state(pos)
    }

    fn tile_at(&self, pos: BlockPos) -> Option<TileRef> {
        (**self).tile_at(pos)
    }
}

impl<W: BlockWorld + ?Sized> BlockWorld for Box<W> {
    fn block_state(&self, pos: BlockPos) -> BlockState {
        (**self).block_state(pos)
    }

    fn tile_at(&self, pos: BlockPos) -> Option<TileRef> {
        (**self).tile_at(pos)
    }
}
