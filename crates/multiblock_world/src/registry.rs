//! Registry of block type names.
//!
//! Block types are registered by name and referred to by [`BlockId`] so
//! predicates compare integers instead of strings.

use std::collections::HashMap;
use std::sync::Arc;

use multiblock_foundation::{BlockId, BlockState, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name-to-id registry for block types.
///
/// Not thread-safe; build it up front, then share it read-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockRegistry {
    /// Names by id.
    names: Vec<Arc<str>>,
    /// Ids by name.
    ids: HashMap<Arc<str>, BlockId>,
}

impl BlockRegistry {
    /// Name of the reserved air block, always [`BlockId::AIR`].
    pub const AIR: &'static str = "air";

    /// Creates a registry with air pre-registered.
    #[must_use]
    pub fn new() -> Self {
        let air: Arc<str> = Self::AIR.into();
        Self {
            names: vec![air.clone()],
            ids: HashMap::from([(air, BlockId::AIR)]),
        }
    }

    /// Registers a block name, returning its id. Registering twice returns the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](multiblock_foundation::ErrorKind::RegistryFull)
    /// once every `u32` id has been handed out.
    pub fn register(&mut self, name: &str) -> Result<BlockId> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let id = next_id(self.names.len())?;
        let arc: Arc<str> = name.into();
        self.names.push(arc.clone());
        self.ids.insert(arc, id);
        Ok(id)
    }

    /// Registers a block name and returns its default state.
    ///
    /// # Errors
    ///
    /// Fails like [`register`](Self::register).
    pub fn state(&mut self, name: &str) -> Result<BlockState> {
        self.register(name).map(BlockState::of)
    }

    /// Looks up the id of a registered name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<BlockId> {
        self.ids.get(name).copied()
    }

    /// Looks up the name of an id.
    #[must_use]
    pub fn name(&self, id: BlockId) -> Option<&str> {
        self.names.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Number of registered block types, air included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: air is registered on creation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Id for the block registered after `len` others.
fn next_id(len: usize) -> Result<BlockId> {
    u32::try_from(len)
        .map(BlockId)
        .map_err(|_| Error::registry_full(u64::from(u32::MAX) + 1))
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
