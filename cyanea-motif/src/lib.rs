//! Motif discovery over sets of DNA sequences for the Cyanea ecosystem.
//!
//! Given `t` sequences and a motif length `k`, pick one k-mer per sequence
//! so that the chosen set is as conserved as possible, i.e. has the fewest
//! mismatches against its consensus:
//!
//! - **Profiles** — [`CountMatrix`] and [`Profile`], raw or with pseudocounts
//! - **Scoring** — [`MotifSet::consensus`] and [`MotifSet::score`]
//! - **Likelihood** — [`Profile::probability`] and [`profile_most_probable_kmer`]
//! - **Sampling** — [`normalize`], [`weighted_die`], [`profile_generated_string`]
//! - **Searches** — [`greedy_motif_search`], [`randomized_motif_search`],
//!   [`gibbs_sampler`]
//! - **Trials** — [`SearchConfig`] and [`run_search`] keep the best of many
//!   seeded runs
//!
//! All randomness comes from a caller-supplied [`rand::Rng`].
//!
//! # Example
//!
//! ```
//! use cyanea_motif::{gibbs_sampler, DnaSet};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let dna = DnaSet::new([
//!     "GGCGTTCAGGCA",
//!     "AAGAATCAGTCA",
//!     "CAAGGAGTTCGC",
//!     "CACGTCAATCAC",
//!     "CAATAATATTCG",
//! ])
//! .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let motifs = gibbs_sampler(&dna, 3, 200, &mut rng).unwrap();
//! assert_eq!(motifs.len(), 5);
//! assert!(motifs.score() <= 5);
//! ```

pub mod alphabet;
pub mod config;
pub mod dna;
pub mod fasta;
pub mod motifs;
pub mod probability;
pub mod profile;
pub mod sampler;
pub mod search;

pub use alphabet::Nucleotide;
pub use config::{run_search, SearchConfig, SearchReport, Strategy};
pub use dna::DnaSet;
pub use fasta::{read_dna_set, read_dna_set_file};
pub use motifs::{consensus, score, MotifSet};
pub use probability::profile_most_probable_kmer;
pub use profile::{
    count, count_with_pseudocounts, profile, profile_with_pseudocounts, CountMatrix, Profile,
};
pub use sampler::{normalize, profile_generated_string, weighted_die};
pub use search::{
    gibbs_sampler, gibbs_sampler_t, greedy_motif_search, greedy_motif_search_t,
    greedy_motif_search_with_pseudocounts, randomized_motif_search, randomized_motif_search_t,
};
