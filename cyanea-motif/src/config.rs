//! Search configuration and the repeated-trial runner.
//!
//! Randomized strategies only promise a local optimum, so they are usually
//! run many times with the best result kept. [`run_search`] does exactly
//! that from a single seeded generator, which makes whole experiments
//! reproducible from [`SearchConfig::seed`].

use std::fmt;

use cyanea_core::{CyaneaError, Result, Summarizable};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::dna::DnaSet;
use crate::motifs::MotifSet;
use crate::search::{
    gibbs_sampler, greedy_motif_search, greedy_motif_search_with_pseudocounts,
    randomized_motif_search,
};

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Greedy search with a raw-count profile.
    Greedy,
    /// Greedy search with a pseudocount profile.
    GreedyPseudocounts,
    /// Monte Carlo restarts, `iterations` restarts per trial.
    Randomized,
    /// Gibbs sampling, `iterations` steps per trial.
    Gibbs,
}

impl Strategy {
    /// Whether repeated trials can give different answers.
    pub fn is_randomized(self) -> bool {
        matches!(self, Strategy::Randomized | Strategy::Gibbs)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Greedy => "greedy",
            Strategy::GreedyPseudocounts => "greedy-pseudocounts",
            Strategy::Randomized => "randomized",
            Strategy::Gibbs => "gibbs",
        };
        f.write_str(name)
    }
}

/// Configuration for [`run_search`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Search strategy (default Gibbs).
    pub strategy: Strategy,
    /// Motif length `k` (default 8).
    pub motif_len: usize,
    /// Restarts per trial for randomized search, steps per trial for Gibbs
    /// (default 100). Ignored by the greedy strategies.
    pub iterations: usize,
    /// Independent trials; the best-scoring result is kept (default 20).
    /// Deterministic strategies run once.
    pub trials: usize,
    /// PRNG seed for reproducibility (default 42).
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Gibbs,
            motif_len: 8,
            iterations: 100,
            trials: 20,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Default configuration for `strategy` and motif length `k`.
    pub fn new(strategy: Strategy, motif_len: usize) -> Self {
        Self {
            strategy,
            motif_len,
            ..Self::default()
        }
    }

    /// Check the parameters that do not depend on the input sequences.
    pub fn validate(&self) -> Result<()> {
        if self.motif_len == 0 {
            return Err(CyaneaError::InvalidInput(
                "motif_len must be at least 1".into(),
            ));
        }
        if self.strategy.is_randomized() && self.iterations == 0 {
            return Err(CyaneaError::InvalidInput(
                "iterations must be at least 1".into(),
            ));
        }
        if self.trials == 0 {
            return Err(CyaneaError::InvalidInput(
                "trials must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Best result of a [`run_search`] call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Strategy that produced the motifs.
    pub strategy: Strategy,
    /// Lowest-scoring motif set over all trials.
    pub motifs: MotifSet,
    /// Its score.
    pub score: usize,
    /// Its consensus.
    pub consensus: Vec<u8>,
    /// Number of trials actually run.
    pub trials: usize,
    /// Zero-based trial that produced `motifs`.
    pub best_trial: usize,
}

impl Summarizable for SearchReport {
    fn summary(&self) -> String {
        format!(
            "{}: score {} consensus {} (best of {} trials)",
            self.strategy,
            self.score,
            String::from_utf8_lossy(&self.consensus),
            self.trials
        )
    }
}

/// Run the configured search `trials` times and keep the best result.
///
/// All trials share one [`StdRng`] seeded from `config.seed`. Earlier
/// trials win ties.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the motif length
/// does not fit every sequence.
pub fn run_search(dna: &DnaSet, config: &SearchConfig) -> Result<SearchReport> {
    config.validate()?;
    dna.check_motif_len(config.motif_len)?;

    let trials = if config.strategy.is_randomized() {
        config.trials
    } else {
        1
    };
    info!(
        strategy = %config.strategy,
        k = config.motif_len,
        t = dna.len(),
        trials,
        seed = config.seed,
        "running motif search"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut best = run_once(dna, config, &mut rng)?;
    let mut best_score = best.score();
    let mut best_trial = 0;
    for trial in 1..trials {
        let motifs = run_once(dna, config, &mut rng)?;
        let score = motifs.score();
        debug!(trial, score, "trial finished");
        if score < best_score {
            best = motifs;
            best_score = score;
            best_trial = trial;
        }
    }

    let consensus = best.consensus();
    info!(
        score = best_score,
        consensus = %String::from_utf8_lossy(&consensus),
        best_trial,
        "motif search finished"
    );
    Ok(SearchReport {
        strategy: config.strategy,
        motifs: best,
        score: best_score,
        consensus,
        trials,
        best_trial,
    })
}

fn run_once(dna: &DnaSet, config: &SearchConfig, rng: &mut StdRng) -> Result<MotifSet> {
    let k = config.motif_len;
    match config.strategy {
        Strategy::Greedy => greedy_motif_search(dna, k),
        Strategy::GreedyPseudocounts => greedy_motif_search_with_pseudocounts(dna, k),
        Strategy::Randomized => randomized_motif_search(dna, k, config.iterations, rng),
        Strategy::Gibbs => gibbs_sampler(dna, k, config.iterations, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures;

    #[test]
    fn default_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategy, Strategy::Gibbs);
    }

    #[test]
    fn validate_rejects_zeroes() {
        let mut config = SearchConfig::new(Strategy::Randomized, 0);
        assert!(config.validate().is_err());
        config.motif_len = 3;
        config.iterations = 0;
        assert!(config.validate().is_err());
        config.iterations = 10;
        config.trials = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn greedy_iterations_are_ignored() {
        let config = SearchConfig {
            iterations: 0,
            ..SearchConfig::new(Strategy::Greedy, 3)
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn greedy_runs_once() {
        let report = run_search(&fixtures::worked(), &SearchConfig::new(Strategy::Greedy, 3)).unwrap();
        assert_eq!(report.trials, 1);
        assert_eq!(report.best_trial, 0);
        assert_eq!(report.score, 2);
        assert_eq!(report.motifs.to_strings(), ["CAG", "CAG", "CAA", "CAA", "CAA"]);
        assert_eq!(report.consensus, b"CAA");
    }

    #[test]
    fn same_seed_same_report() {
        let dna = fixtures::planted();
        let config = SearchConfig {
            iterations: 50,
            trials: 5,
            seed: 99,
            ..SearchConfig::new(Strategy::Gibbs, 8)
        };
        let a = run_search(&dna, &config).unwrap();
        let b = run_search(&dna, &config).unwrap();
        assert_eq!(a.motifs, b.motifs);
        assert_eq!(a.best_trial, b.best_trial);
    }

    #[test]
    fn gibbs_trials_find_planted_motif() {
        let config = SearchConfig {
            iterations: 200,
            trials: 60,
            seed: 7,
            ..SearchConfig::new(Strategy::Gibbs, 8)
        };
        let report = run_search(&fixtures::planted(), &config).unwrap();
        assert_eq!(report.trials, 60);
        assert_eq!(report.score, 0);
        assert_eq!(report.consensus, b"ACGTTGCA");
    }

    #[test]
    fn randomized_trials_find_planted_motif() {
        let config = SearchConfig {
            iterations: 50,
            trials: 4,
            ..SearchConfig::new(Strategy::Randomized, 8)
        };
        let report = run_search(&fixtures::planted(), &config).unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(report.summary(), "randomized: score 0 consensus ACGTTGCA (best of 4 trials)");
    }

    #[test]
    fn motif_len_checked_against_sequences() {
        let config = SearchConfig::new(Strategy::Randomized, 13);
        assert!(run_search(&fixtures::worked(), &config).is_err());
    }
}
