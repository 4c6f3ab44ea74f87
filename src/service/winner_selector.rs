//! Uniform winner sampling.
//!
//! Selection is a pure function over the entry pool: every candidate outside
//! the exclusion set is equally likely to be drawn, with no replacement. The
//! random source is injected so tests can drive it with a seeded generator.

use rand::Rng;
use std::collections::HashSet;

/// Samples up to `count` unique winners from `pool`, excluding `exclude`.
///
/// The draw is uniform sampling without replacement over the deduplicated
/// candidate set (`rand::seq::index::sample`, a partial Fisher-Yates). It
/// never shuffles a list that still contains duplicates, so no candidate is
/// over-weighted.
///
/// # Arguments
/// - `pool`: Candidate user ids (duplicates tolerated and ignored)
/// - `count`: Number of winners wanted
/// - `exclude`: User ids that must not be drawn (prior winners on reroll)
/// - `rng`: Random source
///
/// # Returns
/// - Unique user ids drawn from `pool - exclude`; length is
///   `min(count, |pool - exclude|)`
pub fn select(pool: &[u64], count: usize, exclude: &HashSet<u64>, rng: &mut impl Rng) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(pool.len());
    let candidates: Vec<u64> = pool
        .iter()
        .copied()
        .filter(|id| !exclude.contains(id) && seen.insert(*id))
        .collect();

    let amount = count.min(candidates.len());
    if amount == 0 {
        return Vec::new();
    }

    rand::seq::index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}
