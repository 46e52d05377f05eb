//! Proportional sampling of k-mers from a profile.
//!
//! - [`normalize`] — rescale non-negative weights so they sum to 1
//! - [`weighted_die`] — roll a loaded die over a normalized distribution
//! - [`profile_generated_string`] — draw a window of a sequence with
//!   probability proportional to its profile likelihood

use cyanea_core::{CyaneaError, Result};
use rand::Rng;

use crate::probability::check_window;
use crate::profile::Profile;

/// How far a die's total mass may stray from 1 before it is rejected.
const MASS_TOLERANCE: f64 = 1e-6;

/// Divide every weight by the total so the result sums to 1.
///
/// # Errors
///
/// Returns [`CyaneaError::DegenerateDistribution`] if `weights` is empty,
/// holds a negative or non-finite value, or sums to zero.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>> {
    let total = checked_mass(weights)?;
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Draw an index with probability proportional to `probabilities[i]`.
///
/// A uniform `p` in `[0, 1)` is drawn and the probabilities are accumulated
/// in order; the first index whose running sum exceeds `p` is returned. If
/// rounding leaves the running sum short of `p`, the last index with
/// non-zero mass is returned.
///
/// # Errors
///
/// Returns [`CyaneaError::DegenerateDistribution`] for the same inputs that
/// [`normalize`] rejects, and for weights that do not sum to 1 within
/// `1e-6`. Pass raw weights through [`normalize`] first.
pub fn weighted_die<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> Result<usize> {
    let total = checked_mass(probabilities)?;
    if (total - 1.0).abs() > MASS_TOLERANCE {
        return Err(CyaneaError::DegenerateDistribution(format!(
            "probabilities sum to {}, expected 1",
            total
        )));
    }

    let p: f64 = rng.gen();
    let mut running = 0.0;
    for (i, &prob) in probabilities.iter().enumerate() {
        running += prob;
        if running > p {
            return Ok(i);
        }
    }
    Ok(probabilities
        .iter()
        .rposition(|&prob| prob > 0.0)
        .unwrap_or(probabilities.len() - 1))
}

/// Pick a k-mer of `text` at random, weighting each window by its
/// probability under `profile`.
///
/// Every window is its own outcome, so a k-mer that occurs twice gets twice
/// the mass.
///
/// # Errors
///
/// Returns an error if `k` does not fit `text` or the profile, or if every
/// window has probability 0 (only possible with a raw-count profile).
pub fn profile_generated_string<'a, R: Rng + ?Sized>(
    text: &'a [u8],
    profile: &Profile,
    k: usize,
    rng: &mut R,
) -> Result<&'a [u8]> {
    check_window(text, k, profile)?;

    let weights: Vec<f64> = text.windows(k).map(|w| profile.probability(w)).collect();
    let probabilities = normalize(&weights)?;
    let i = weighted_die(&probabilities, rng)?;
    Ok(&text[i..i + k])
}

/// Sum of `weights`, rejecting anything that cannot be sampled from.
fn checked_mass(weights: &[f64]) -> Result<f64> {
    if weights.is_empty() {
        return Err(CyaneaError::DegenerateDistribution(
            "distribution has no outcomes".into(),
        ));
    }
    if let Some(i) = weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
        return Err(CyaneaError::DegenerateDistribution(format!(
            "weight {} is {}, expected a finite non-negative value",
            i, weights[i]
        )));
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(CyaneaError::DegenerateDistribution(
            "weights sum to zero".into(),
        ));
    }
    Ok(total)
}
