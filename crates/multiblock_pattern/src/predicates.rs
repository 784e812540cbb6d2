//! A library of common cell predicates.
//!
//! ```
//! use multiblock_foundation::{BlockId, BlockState};
//! use multiblock_pattern::predicates;
//!
//! let casing = BlockState::of(BlockId(1));
//! let frame = predicates::state(casing).or(predicates::air());
//! assert_eq!(frame.name(), Some("(BlockState(1:0) | air)"));
//! ```

use std::sync::Arc;

use multiblock_foundation::{BlockId, BlockState};
use multiblock_world::Ability;
use tracing::warn;

use crate::parts::{MultiblockParts, PARTS_KEY};
use crate::predicate::CellPredicate;

/// Matches every cell.
#[must_use]
pub fn any() -> CellPredicate {
    CellPredicate::new(|_| true).named("any")
}

/// Matches air.
#[must_use]
pub fn air() -> CellPredicate {
    CellPredicate::new(|s| s.block_state().is_air()).named("air")
}

/// Matches exactly `state`, metadata included.
#[must_use]
pub fn state(state: BlockState) -> CellPredicate {
    CellPredicate::new(move |s| s.block_state() == state).named(&format!("{state:?}"))
}

/// Matches any of `states`.
#[must_use]
pub fn states(states: &[BlockState]) -> CellPredicate {
    let name = format!("one of {states:?}");
    let states: Arc<[BlockState]> = states.into();
    CellPredicate::new(move |s| states.contains(&s.block_state())).named(&name)
}

/// Matches a block type, ignoring metadata.
#[must_use]
pub fn block(id: BlockId) -> CellPredicate {
    CellPredicate::new(move |s| s.block_state().block == id).named(&format!("block {}", id.0))
}

/// Matches cells that carry a tile.
#[must_use]
pub fn has_tile() -> CellPredicate {
    CellPredicate::new(|s| s.tile().is_some()).named("has tile")
}

/// Matches cells whose tile is of the given kind.
#[must_use]
pub fn tile_kind(kind: &str) -> CellPredicate {
    let name = format!("tile {kind}");
    let kind: Arc<str> = kind.into();
    CellPredicate::new(move |s| s.tile().is_some_and(|t| t.kind() == &*kind)).named(&name)
}

/// Matches cells whose tile exposes at least one of `abilities`, recording
/// the tile in the global context's [`MultiblockParts`].
///
/// The tile is recorded under each of `abilities` it exposes. A cell that
/// matches but whose context entry holds something other than
/// `MultiblockParts` is treated as a mismatch.
#[must_use]
pub fn ability_part(abilities: &[Ability]) -> CellPredicate {
    let names: Vec<&str> = abilities.iter().map(Ability::name).collect();
    let name = format!("ability [{}]", names.join(", "));
    let abilities: Arc<[Ability]> = abilities.into();

    CellPredicate::new(move |s| {
        let Some(tile) = s.tile() else {
            return false;
        };
        let matched: Vec<Ability> = abilities
            .iter()
            .filter(|a| tile.has_ability(a))
            .cloned()
            .collect();
        if matched.is_empty() {
            return false;
        }

        let pos = s.pos();
        match s
            .match_context_mut()
            .get_or_create(PARTS_KEY, MultiblockParts::new)
        {
            Ok(parts) => {
                parts.record(pos, &tile, &matched);
                true
            }
            Err(err) => {
                warn!(%err, ?pos, "cannot record multiblock part");
                false
            }
        }
    })
    .named(&name)
}

/// Wraps `inner`, incrementing the global counter `key` every time it matches.
#[must_use]
pub fn counted(key: &str, inner: CellPredicate) -> CellPredicate {
    let name = inner.name().map(|n| format!("{n} counted as {key}"));
    let key: Arc<str> = key.into();
    let predicate = CellPredicate::new(move |s| {
        if !inner.test(s) {
            return false;
        }
        match s.match_context_mut().increment(&key, 1) {
            Ok(_) => true,
            Err(err) => {
                warn!(%err, "cannot increment counter");
                false
            }
        }
    });
    match name {
        Some(name) => predicate.named(&name),
        None => predicate,
    }
}

/// Like [`counted`], but increments the counter in the layer context, where a
/// layer validator can see it.
#[must_use]
pub fn counted_in_layer(key: &str, inner: CellPredicate) -> CellPredicate {
    let name = inner.name().map(|n| format!("{n} counted in layer as {key}"));
    let key: Arc<str> = key.into();
    let predicate = CellPredicate::new(move |s| {
        if !inner.test(s) {
            return false;
        }
        match s.layer_context_mut().increment(&key, 1) {
            Ok(_) => true,
            Err(err) => {
                warn!(%err, "cannot increment layer counter");
                false
            }
        }
    });
    match name {
        Some(name) => predicate.named(&name),
        None => predicate,
    }
}
