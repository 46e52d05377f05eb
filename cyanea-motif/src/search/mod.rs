//! Motif search strategies.
//!
//! - [`greedy_motif_search`] — deterministic, builds each candidate one
//!   sequence at a time from a raw-count profile
//! - [`greedy_motif_search_with_pseudocounts`] — the same loop with Laplace
//!   smoothing
//! - [`randomized_motif_search`] — Monte Carlo random restarts, each a strict
//!   hill-climb
//! - [`gibbs_sampler`] — resamples one motif per step and keeps the best set
//!   it has seen
//!
//! Every strategy validates its arguments before entering its loop and
//! returns the lowest-scoring [`MotifSet`](crate::MotifSet) it found.

mod gibbs;
mod greedy;
mod randomized;

pub use gibbs::{gibbs_sampler, gibbs_sampler_t};
pub use greedy::{
    greedy_motif_search, greedy_motif_search_t, greedy_motif_search_with_pseudocounts,
};
pub use randomized::{randomized_motif_search, randomized_motif_search_t};

use cyanea_core::{CyaneaError, Result};
use rand::Rng;

use crate::dna::DnaSet;
use crate::motifs::MotifSet;
use crate::probability::profile_most_probable_kmer;
use crate::profile::Profile;

/// One uniformly random k-mer from every sequence.
///
/// Start offsets are drawn within each sequence's own length. The caller
/// has already checked that `k` fits.
pub(crate) fn random_motifs<R: Rng + ?Sized>(dna: &DnaSet, k: usize, rng: &mut R) -> MotifSet {
    let motifs = dna
        .iter()
        .map(|seq| {
            let start = rng.gen_range(0..=seq.len() - k);
            seq[start..start + k].to_vec()
        })
        .collect();
    MotifSet::from_validated(motifs, k)
}

/// Most probable k-mer of every sequence under `profile`.
pub(crate) fn most_probable_motifs(dna: &DnaSet, k: usize, profile: &Profile) -> Result<MotifSet> {
    let motifs = dna
        .iter()
        .map(|seq| profile_most_probable_kmer(seq, k, profile).map(<[u8]>::to_vec))
        .collect::<Result<Vec<_>>>()?;
    Ok(MotifSet::from_validated(motifs, k))
}

pub(crate) fn check_iterations(n: usize, what: &str) -> Result<()> {
    if n == 0 {
        return Err(CyaneaError::InvalidInput(format!("{} must be at least 1", what)));
    }
    Ok(())
}
