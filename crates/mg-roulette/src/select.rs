//! Weighted single-draw selection

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use mg_core::{GachaError, GachaResult, Reward};

/// Draw one pool index with probability proportional to effective weight.
///
/// Weights are floored at [`mg_core::WEIGHT_FLOOR`], so zero or negative
/// values stay drawable instead of poisoning the distribution. Callers are
/// expected to check pool emptiness first; invoking this on an empty pool
/// is an explicit [`GachaError::EmptyPool`], never a panic.
pub fn pick_index<R: Rng + ?Sized>(pool: &[Reward], rng: &mut R) -> GachaResult<usize> {
    if pool.is_empty() {
        return Err(GachaError::EmptyPool);
    }

    let weights: Vec<f64> = pool.iter().map(Reward::effective_weight).collect();
    let dist =
        WeightedIndex::new(&weights).map_err(|e| GachaError::InvalidWeights(e.to_string()))?;
    Ok(dist.sample(rng))
}

/// Convenience wrapper returning the reward itself
pub fn pick_reward<'a, R: Rng + ?Sized>(
    pool: &'a [Reward],
    rng: &mut R,
) -> GachaResult<&'a Reward> {
    let index = pick_index(pool, rng)?;
    Ok(&pool[index])
}
