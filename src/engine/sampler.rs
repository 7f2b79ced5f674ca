use rand::Rng;
use rand::rngs::SmallRng;

use crate::engine::EngineError;
use crate::engine::range::LevelRange;
use crate::engine::store::{EntryId, EntryStore};
use crate::engine::weights::WeightTable;

/// Pick an index into `weights`, each slot weighted by its value.
/// Returns None when the slice is empty or sums to zero.
pub fn pick_weighted(weights: &[u32], rng: &mut SmallRng) -> Option<usize> {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for (i, &weight) in weights.iter().enumerate() {
        let weight = u64::from(weight);
        if roll < weight {
            return Some(i);
        }
        roll -= weight;
    }

    Some(weights.len() - 1)
}

/// Draw one entry from the slice of the store covered by `range`, using the
/// current weights as relative probability mass. The empty-span check is
/// defensive: the range setters only validate level bounds, so a word list
/// with no entries at the covered levels still lands here.
pub fn draw(
    store: &EntryStore,
    weights: &WeightTable,
    range: LevelRange,
    rng: &mut SmallRng,
) -> Result<EntryId, EngineError> {
    let span = store.span_for(range);
    let lo = span.start;
    pick_weighted(weights.span(span), rng)
        .map(|offset| lo + offset)
        .ok_or(EngineError::EmptyRange)
}
