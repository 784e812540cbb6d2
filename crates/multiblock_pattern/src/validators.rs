//! Common context validators.

use multiblock_foundation::IntRange;
use multiblock_world::Ability;

use crate::parts::{MultiblockParts, PARTS_KEY};
use crate::predicate::ContextValidator;

/// Passes if the integer counter `key` is at least `n`. Absent counts as zero.
#[must_use]
pub fn at_least(key: &str, n: i64) -> ContextValidator {
    let name = format!("{key} >= {n}");
    let key = key.to_owned();
    ContextValidator::new(move |ctx| ctx.get_or_default(&key, 0_i64) >= n).named(&name)
}

/// Passes if the integer counter `key` lies in `range`. Absent counts as zero.
#[must_use]
pub fn in_range(key: &str, range: IntRange) -> ContextValidator {
    let name = format!("{key} in {range}");
    let key = key.to_owned();
    ContextValidator::new(move |ctx| {
        let count = ctx.get_or_default(&key, 0_i64);
        u32::try_from(count).is_ok_and(|c| range.contains(c))
    })
    .named(&name)
}

/// Passes if at least one collected part exposes `ability`.
#[must_use]
pub fn has_ability(ability: Ability) -> ContextValidator {
    ability_count(ability, IntRange::at_least(1))
}

/// Passes if the number of collected parts exposing `ability` lies in `range`.
#[must_use]
pub fn ability_count(ability: Ability, range: IntRange) -> ContextValidator {
    let name = format!("{ability} parts in {range}");
    ContextValidator::new(move |ctx| {
        let count = ctx
            .get::<MultiblockParts>(PARTS_KEY)
            .map_or(0, |parts| parts.abilities(&ability).len());
        u32::try_from(count).is_ok_and(|c| range.contains(c))
    })
    .named(&name)
}
