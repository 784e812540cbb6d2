//! Tiles: side data attached to individual cells.
//!
//! A tile is whatever lives "inside" a cell beyond its block state, such as a
//! hatch, a bus, or a controller. Tiles expose [`Ability`] handles which a
//! matched structure collects per role.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named capability a tile can expose (`import_fluids`, `output_energy`, ...).
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ability(Arc<str>);

impl Ability {
    /// Creates an ability with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.into())
    }

    /// Returns the ability name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side data attached to a cell.
pub trait Tile: fmt::Debug + Send + Sync {
    /// Kind of tile, e.g. `"fluid_hatch"`.
    fn kind(&self) -> &str;

    /// Abilities this tile exposes.
    fn abilities(&self) -> &[Ability] {
        &[]
    }

    /// Returns true if this tile exposes `ability`.
    fn has_ability(&self, ability: &Ability) -> bool {
        self.abilities().contains(ability)
    }
}

/// Shared handle to a tile.
pub type TileRef = Arc<dyn Tile>;

/// A plain tile described only by its kind and abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleTile {
    kind: Arc<str>,
    abilities: Vec<Ability>,
}

impl SimpleTile {
    /// Creates a tile with no abilities.
    #[must_use]
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.into(),
            abilities: Vec::new(),
        }
    }

    /// Adds an ability.
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        if !self.abilities.contains(&ability) {
            self.abilities.push(ability);
        }
        self
    }

    /// Wraps this tile in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> TileRef {
        Arc::new(self)
    }
}

impl Tile for SimpleTile {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn abilities(&self) -> &[Ability] {
        &self.abilities
    }
}
