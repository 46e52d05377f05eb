//! Gibbs sampling motif search.

use cyanea_core::Result;
use rand::Rng;
use tracing::{debug, trace};

use crate::dna::DnaSet;
use crate::motifs::MotifSet;
use crate::profile::CountMatrix;
use crate::sampler::profile_generated_string;
use crate::search::{check_iterations, random_motifs};

/// Gibbs sampler over `iterations` single-motif resampling steps.
///
/// Starting from one random k-mer per sequence, each step picks a sequence
/// uniformly at random, builds a pseudocount profile from the other `t - 1`
/// motifs, and redraws that sequence's motif with probability proportional
/// to its profile likelihood. Steps may make the working set worse; the
/// lowest-scoring set seen at any point is returned.
///
/// With a single sequence the profile is uniform, so every step draws a
/// uniformly random k-mer.
///
/// # Errors
///
/// Returns an error if `k` does not fit every sequence or `iterations` is 0.
pub fn gibbs_sampler<R: Rng + ?Sized>(
    dna: &DnaSet,
    k: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    dna.check_motif_len(k)?;
    check_iterations(iterations, "iterations")?;
    debug!(k, t = dna.len(), iterations, "gibbs sampler");

    let start = random_motifs(dna, k, rng);
    let (best, score) = sample_from(dna, start, iterations, rng)?;

    debug!(score, "gibbs sampler done");
    Ok(best)
}

/// [`gibbs_sampler`] with an explicit sequence count `t`, checked against
/// `dna`.
pub fn gibbs_sampler_t<R: Rng + ?Sized>(
    dna: &DnaSet,
    k: usize,
    t: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<MotifSet> {
    dna.check_count(t)?;
    gibbs_sampler(dna, k, iterations, rng)
}

/// Run the sampler from a given starting set. Returns the best set and its
/// score.
pub(crate) fn sample_from<R: Rng + ?Sized>(
    dna: &DnaSet,
    mut motifs: MotifSet,
    iterations: usize,
    rng: &mut R,
) -> Result<(MotifSet, usize)> {
    let k = motifs.k();
    let t = motifs.len();
    let mut best = motifs.clone();
    let mut best_score = best.score();

    for iteration in 0..iterations {
        let r = rng.gen_range(0..t);
        let profile = CountMatrix::from_rows(motifs.iter_without(r), k, 1).to_profile();
        let kmer = profile_generated_string(&dna[r], &profile, k, rng)?;
        motifs.replace(r, kmer);

        let score = motifs.score();
        if score < best_score {
            trace!(iteration, score, "gibbs improvement");
            best.clone_from(&motifs);
            best_score = score;
        }
    }

    Ok((best, best_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deterministic_for_a_seed() {
        let dna = fixtures::planted();
        let a = gibbs_sampler(&dna, 8, 200, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = gibbs_sampler(&dna, 8, 200, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn returns_best_not_last() {
        // Starting at the optimum, no later set can beat it.
        let dna = fixtures::planted();
        let start = MotifSet::new(["ACGTTGCA"; 10]).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let (best, score) = sample_from(&dna, start.clone(), 500, &mut rng).unwrap();
        assert_eq!(score, 0);
        assert_eq!(best, start);
    }

    #[test]
    fn reaches_optimum_on_worked_example() {
        let dna = fixtures::worked();
        let best = gibbs_sampler(&dna, 3, 1000, &mut StdRng::seed_from_u64(12)).unwrap();
        assert_eq!(best.len(), 5);
        assert_eq!(best.score(), 2);
    }

    #[test]
    fn single_sequence() {
        let dna = DnaSet::new(["ACGTACGTAC"]).unwrap();
        let best = gibbs_sampler(&dna, 4, 20, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(best.len(), 1);
        assert_eq!(best.score(), 0);
    }

    #[test]
    fn explicit_t_is_checked() {
        let dna = fixtures::worked();
        let a = gibbs_sampler_t(&dna, 3, 5, 100, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = gibbs_sampler(&dna, 3, 100, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(gibbs_sampler_t(&dna, 3, 6, 100, &mut rng).is_err());
    }

    #[test]
    fn rejects_bad_arguments() {
        let dna = fixtures::worked();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(gibbs_sampler(&dna, 3, 0, &mut rng).is_err());
        assert!(gibbs_sampler(&dna, 0, 10, &mut rng).is_err());
        assert!(gibbs_sampler(&dna, 13, 10, &mut rng).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dna_set() -> impl Strategy<Value = Vec<Vec<u8>>> {
        proptest::collection::vec(
            proptest::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                5..16,
            ),
            1..6,
        )
    }

    proptest! {
        #[test]
        fn never_worse_than_start(seqs in dna_set(), seed in any::<u64>(), n in 1usize..50) {
            let dna = DnaSet::new(&seqs).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let start = random_motifs(&dna, 4, &mut rng);
            let initial = start.score();
            let (best, score) = sample_from(&dna, start, n, &mut rng).unwrap();
            prop_assert!(score <= initial);
            prop_assert_eq!(score, best.score());
        }
    }
}
