//! Parts collected by ability predicates during a match.

use std::collections::BTreeMap;
use std::fmt;

use multiblock_foundation::BlockPos;
use multiblock_world::{Ability, TileRef};

/// Global context key under which [`MultiblockParts`] are stored.
pub const PARTS_KEY: &str = "multiblock_parts";

/// Tiles that filled an ability role, in sweep order and grouped by ability.
#[derive(Clone, Default)]
pub struct MultiblockParts {
    parts: Vec<(BlockPos, TileRef)>,
    by_ability: BTreeMap<Ability, Vec<TileRef>>,
}

impl MultiblockParts {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `tile` at `pos` under every ability in `matched`.
    ///
    /// A position is recorded at most once. Returns false if it was
    /// already present.
    pub fn record(&mut self, pos: BlockPos, tile: &TileRef, matched: &[Ability]) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.parts.push((pos, TileRef::clone(tile)));
        for ability in matched {
            self.by_ability
                .entry(ability.clone())
                .or_default()
                .push(TileRef::clone(tile));
        }
        true
    }

    /// Returns true if a part was recorded at `pos`.
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.parts.iter().any(|(p, _)| *p == pos)
    }

    /// All parts in the order they were visited.
    #[must_use]
    pub fn parts(&self) -> &[(BlockPos, TileRef)] {
        &self.parts
    }

    /// Tiles recorded for `ability`, in visit order.
    #[must_use]
    pub fn abilities(&self, ability: &Ability) -> &[TileRef] {
        self.by_ability.get(ability).map_or(&[], Vec::as_slice)
    }

    /// Abilities with at least one recorded tile, in name order.
    pub fn ability_names(&self) -> impl Iterator<Item = &Ability> {
        self.by_ability.keys()
    }

    /// Number of recorded parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if no part was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Debug for MultiblockParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<&str, usize> = self
            .by_ability
            .iter()
            .map(|(a, tiles)| (a.name(), tiles.len()))
            .collect();
        f.debug_struct("MultiblockParts")
            .field("parts", &self.parts.len())
            .field("abilities", &counts)
            .finish()
    }
}
