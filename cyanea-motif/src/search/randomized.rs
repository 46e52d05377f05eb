//! Randomized (Monte Carlo) motif search.

use cyanea_core::Result;
use rand::Rng;
use tracing::{debug, trace};

use crate::dna::DnaSet;
use crate::motifs::MotifSet;
use crate::search::{check_iterations, most_probable_motifs, random_motifs};

/// Randomized motif search with `restarts` independent random starts.
///
/// Each restart picks one random k-mer per sequence, then repeatedly
/// replaces the whole set with the profile-most-probable k-mers under its
/// pseudocount profile for as long as the score strictly improves. The best
/// local optimum over all restarts is returned; earlier restarts win ties.
///
/// # Errors
///
/// Returns an error if `k` does not fit every sequence or `restarts` is 0.
pub fn randomized_motif_search<R: Rng + ?Sized>(
    dna: &DnaSet,
    k: usize,
    restarts: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    dna.check_motif_len(k)?;
    check_iterations(restarts, "restarts")?;
    debug!(k, t = dna.len(), restarts, "randomized motif search");

    let mut best = climb(dna, random_motifs(dna, k, rng))?;
    for restart in 1..restarts {
        let local = climb(dna, random_motifs(dna, k, rng))?;
        trace!(
            restart,
            score = local.score,
            steps = local.trajectory.len() - 1,
            "restart converged"
        );
        if local.score < best.score {
            best = local;
        }
    }

    debug!(score = best.score, "randomized motif search done");
    Ok(best.motifs)
}

/// [`randomized_motif_search`] with an explicit sequence count `t`, checked
/// against `dna`.
pub fn randomized_motif_search_t<R: Rng + ?Sized>(
    dna: &DnaSet,
    k: usize,
    t: usize,
    restarts: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    dna.check_count(t)?;
    randomized_motif_search(dna, k, restarts, rng)
}

/// Outcome of one hill-climb.
#[derive(Debug)]
pub(crate) struct Climb {
    pub motifs: MotifSet,
    pub score: usize,
    /// Score of every accepted set, starting with the initial one.
    pub trajectory: Vec<usize>,
}

/// Hill-climb from `motifs` until the score stops improving.
///
/// The trajectory is strictly decreasing, so a climb takes at most as many
/// steps as the initial score.
pub(crate) fn climb(dna: &DnaSet, mut motifs: MotifSet) -> Result<Climb> {
    let k = motifs.k();
    let mut score = motifs.score();
    let mut trajectory = vec![score];
    loop {
        let profile = motifs.profile_with_pseudocounts();
        let next = most_probable_motifs(dna, k, &profile)?;
        let next_score = next.score();
        if next_score >= score {
            return Ok(Climb {
                motifs,
                score,
                trajectory,
            });
        }
        motifs = next;
        score = next_score;
        trajectory.push(score);
    }
}
