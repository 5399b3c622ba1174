//! Omikuji tier selection.
//!
//! Two variants: a uniform pick, and a weighted pick driven by per-tier
//! probabilities. The weighted pick is a left-to-right cumulative scan
//! against one draw in [0, 1); the final tier is the fallback for any
//! floating-point residue.

use rand::Rng;
use rand::rngs::StdRng;

use uranai_core::omikuji::WEIGHT_TOLERANCE;
use uranai_core::{CoreError, OmikujiTier};

use crate::error::{EngineError, EngineResult};

/// Select the tier matching a roll in [0, 1).
///
/// The first tier whose cumulative probability reaches the roll wins; if
/// rounding leaves residual probability, the last tier is returned.
pub fn pick_weighted(tiers: &[OmikujiTier], roll: f64) -> &OmikujiTier {
    let mut cumulative = 0.0;
    for tier in tiers {
        cumulative += tier.probability;
        if roll <= cumulative {
            return tier;
        }
    }
    &tiers[tiers.len() - 1]
}

/// Draw one tier using the per-tier probability weights.
///
/// Fails if the weights do not sum to 1 within tolerance.
pub fn draw_weighted<'a>(
    tiers: &'a [OmikujiTier],
    rng: &mut StdRng,
) -> EngineResult<&'a OmikujiTier> {
    if tiers.is_empty() {
        return Err(CoreError::EmptyCatalog("omikuji").into());
    }
    let sum: f64 = tiers.iter().map(|t| t.probability).sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(EngineError::InvalidWeights(sum));
    }
    Ok(pick_weighted(tiers, rng.random::<f64>()))
}

/// Draw one tier uniformly at random.
pub fn draw_uniform<'a>(
    tiers: &'a [OmikujiTier],
    rng: &mut StdRng,
) -> EngineResult<&'a OmikujiTier> {
    if tiers.is_empty() {
        return Err(CoreError::EmptyCatalog("omikuji").into());
    }
    Ok(&tiers[rng.random_range(0..tiers.len())])
}
