//! Canonical initiative ordering.
//!
//! The comparator is a total order applied in sequence until a tie-breaker
//! resolves:
//!
//! 1. living combatants before dead ones;
//! 2. higher initiative first;
//! 3. players before monsters at equal initiative;
//! 4. name ascending at equal type.
//!
//! Sorting is reapplied after every order-affecting mutation; persisted order
//! is never trusted. Because the comparator is a total order and the sort is
//! stable, sorting an already-sorted roster is a no-op.

use std::cmp::Ordering;

use crate::entities::Combatant;

/// Compare two combatants in canonical turn order.
pub fn compare(a: &Combatant, b: &Combatant) -> Ordering {
    a.is_dead
        .cmp(&b.is_dead)
        .then_with(|| b.initiative.cmp(&a.initiative))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort a roster into canonical turn order.
pub fn sort(combatants: &mut [Combatant]) {
    combatants.sort_by(compare);
}
