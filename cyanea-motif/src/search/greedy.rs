//! Greedy motif search.

use cyanea_core::Result;
use tracing::{debug, trace};

use crate::dna::DnaSet;
use crate::motifs::MotifSet;
use crate::probability::profile_most_probable_kmer;
use crate::profile::CountMatrix;

/// Greedy motif search with a raw-count profile.
///
/// For every k-mer of the first sequence, a candidate set is grown one
/// sequence at a time: the profile of the motifs chosen so far picks the
/// most probable k-mer of the next sequence. The lowest-scoring candidate
/// wins; the first k-mer of every sequence is the starting best.
///
/// The raw profile assigns probability 0 to any base not yet seen at a
/// position, which makes early choices dominate. See
/// [`greedy_motif_search_with_pseudocounts`] for the smoothed variant.
///
/// # Errors
///
/// Returns an error if `k` is zero or longer than any sequence.
///
/// # Example
///
/// ```
/// use cyanea_motif::{greedy_motif_search, DnaSet};
///
/// let dna = DnaSet::new([
///     "GGCGTTCAGGCA",
///     "AAGAATCAGTCA",
///     "CAAGGAGTTCGC",
///     "CACGTCAATCAC",
///     "CAATAATATTCG",
/// ])
/// .unwrap();
/// let best = greedy_motif_search(&dna, 3).unwrap();
/// assert_eq!(best.to_strings(), ["CAG", "CAG", "CAA", "CAA", "CAA"]);
/// assert_eq!(best.score(), 2);
/// ```
pub fn greedy_motif_search(dna: &DnaSet, k: usize) -> Result<MotifSet> {
    greedy(dna, k, 0)
}

/// [`greedy_motif_search`] with an explicit sequence count `t`, checked
/// against `dna`.
pub fn greedy_motif_search_t(dna: &DnaSet, k: usize, t: usize) -> Result<MotifSet> {
    dna.check_count(t)?;
    greedy(dna, k, 0)
}

/// Greedy motif search with a pseudocount profile.
///
/// Identical to [`greedy_motif_search`] except that every profile cell is
/// seeded with a count of 1, so no k-mer is ever ruled out entirely.
pub fn greedy_motif_search_with_pseudocounts(dna: &DnaSet, k: usize) -> Result<MotifSet> {
    greedy(dna, k, 1)
}

fn greedy(dna: &DnaSet, k: usize, pseudocount: usize) -> Result<MotifSet> {
    dna.check_motif_len(k)?;
    let t = dna.len();
    debug!(k, t, pseudocount, "greedy motif search");

    let mut best = MotifSet::from_validated(dna.iter().map(|seq| seq[..k].to_vec()).collect(), k);
    let mut best_score = best.score();

    let first = &dna[0];
    for (offset, seed) in first.windows(k).enumerate() {
        let mut motifs: Vec<Vec<u8>> = Vec::with_capacity(t);
        motifs.push(seed.to_vec());
        for j in 1..t {
            let profile =
                CountMatrix::from_rows(motifs.iter().map(Vec::as_slice), k, pseudocount)
                    .to_profile();
            let next = profile_most_probable_kmer(&dna[j], k, &profile)?;
            motifs.push(next.to_vec());
        }

        let candidate = MotifSet::from_validated(motifs, k);
        let score = candidate.score();
        if score < best_score {
            trace!(offset, score, "greedy improvement");
            best = candidate;
            best_score = score;
        }
    }

    debug!(score = best_score, "greedy motif search done");
    Ok(best)
}
