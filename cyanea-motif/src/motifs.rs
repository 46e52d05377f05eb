//! Motif sets, their consensus, and the mismatch score every search minimizes.

use std::fmt;

use cyanea_core::{CyaneaError, Result, Scored, Summarizable};

use crate::alphabet::Nucleotide;
use crate::profile::{CountMatrix, Profile};

/// An ordered set of equal-length k-mers, one chosen from each sequence.
///
/// Bytes are uppercase `ACGT`; construction validates shape and alphabet.
/// With the `serde` feature the set is (de)serialized as a list of strings
/// and re-validated on the way in.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct MotifSet {
    motifs: Vec<Vec<u8>>,
    k: usize,
}

impl MotifSet {
    /// Build a motif set from raw k-mers.
    ///
    /// # Errors
    ///
    /// Returns an error if `motifs` is empty, the first motif is empty, the
    /// motifs differ in length, or any byte is outside `ACGT`.
    pub fn new<S: AsRef<[u8]>>(motifs: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut validated: Vec<Vec<u8>> = Vec::new();
        let mut k = 0;
        for (i, motif) in motifs.into_iter().enumerate() {
            let motif = motif.as_ref();
            if i == 0 {
                if motif.is_empty() {
                    return Err(CyaneaError::InvalidInput("motifs must be non-empty".into()));
                }
                k = motif.len();
            } else if motif.len() != k {
                return Err(CyaneaError::InvalidInput(format!(
                    "motif {} has length {}, expected {}",
                    i,
                    motif.len(),
                    k
                )));
            }
            let mut bases = Vec::with_capacity(k);
            for &b in motif {
                let nt = Nucleotide::from_byte(b).ok_or_else(|| {
                    CyaneaError::InvalidInput(format!(
                        "invalid DNA byte '{}' in motif {}",
                        b as char, i
                    ))
                })?;
                bases.push(nt.to_byte());
            }
            validated.push(bases);
        }
        if validated.is_empty() {
            return Err(CyaneaError::InvalidInput(
                "at least one motif is required".into(),
            ));
        }
        Ok(Self {
            motifs: validated,
            k,
        })
    }

    /// Wrap k-mers sliced out of a validated [`DnaSet`](crate::DnaSet).
    pub(crate) fn from_validated(motifs: Vec<Vec<u8>>, k: usize) -> Self {
        debug_assert!(!motifs.is_empty());
        debug_assert!(motifs.iter().all(|m| m.len() == k));
        Self { motifs, k }
    }

    /// Motif length.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of motifs (`t`).
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Always `false`; a motif set holds at least one motif.
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// The `i`-th motif.
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        self.motifs.get(i).map(Vec::as_slice)
    }

    /// Iterate over the motifs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + Clone {
        self.motifs.iter().map(Vec::as_slice)
    }

    /// Iterate over every motif except the one at `skip`.
    pub(crate) fn iter_without(&self, skip: usize) -> impl Iterator<Item = &[u8]> {
        self.motifs
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != skip)
            .map(|(_, m)| m.as_slice())
    }

    /// Replace the motif at `i` with a pre-validated k-mer.
    pub(crate) fn replace(&mut self, i: usize, motif: &[u8]) {
        debug_assert_eq!(motif.len(), self.k);
        self.motifs[i].clear();
        self.motifs[i].extend_from_slice(motif);
    }

    /// Motifs as owned strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|m| String::from_utf8_lossy(m).into_owned())
            .collect()
    }

    /// Count matrix without pseudocounts.
    pub fn counts(&self) -> CountMatrix {
        CountMatrix::from_motifs(self)
    }

    /// Count matrix with every cell seeded at 1.
    pub fn counts_with_pseudocounts(&self) -> CountMatrix {
        CountMatrix::with_pseudocounts(self)
    }

    /// Raw frequency profile.
    pub fn profile(&self) -> Profile {
        Profile::from_motifs(self)
    }

    /// Pseudocount profile.
    pub fn profile_with_pseudocounts(&self) -> Profile {
        Profile::with_pseudocounts(self)
    }

    /// Most frequent base at each position; ties go to the earlier symbol in
    /// A, C, T, G order.
    pub fn consensus(&self) -> Vec<u8> {
        self.counts().consensus()
    }

    /// Total mismatches between the consensus and every motif.
    ///
    /// Zero exactly when all motifs are identical.
    pub fn score(&self) -> usize {
        let consensus = self.consensus();
        self.motifs
            .iter()
            .map(|m| {
                m.iter()
                    .zip(consensus.iter())
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum()
    }
}

impl fmt::Debug for MotifSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_strings()).finish()
    }
}

/// One motif per line.
impl fmt::Display for MotifSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&String::from_utf8_lossy(m))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for MotifSet {
    type Error = CyaneaError;

    fn try_from(motifs: Vec<String>) -> Result<Self> {
        Self::new(motifs)
    }
}

impl From<MotifSet> for Vec<String> {
    fn from(set: MotifSet) -> Self {
        set.to_strings()
    }
}

impl Scored for MotifSet {
    fn score(&self) -> f64 {
        MotifSet::score(self) as f64
    }
}

impl Summarizable for MotifSet {
    fn summary(&self) -> String {
        format!(
            "{} motifs (k = {}), consensus {}, score {}",
            self.len(),
            self.k,
            String::from_utf8_lossy(&self.consensus()),
            MotifSet::score(self)
        )
    }
}

/// Consensus of raw motif strings.
///
/// # Errors
///
/// Returns an error if `motifs` is empty, ragged, or contains non-ACGT bytes.
pub fn consensus<S: AsRef<[u8]>>(motifs: &[S]) -> Result<Vec<u8>> {
    Ok(MotifSet::new(motifs)?.consensus())
}

/// Score of raw motif strings.
pub fn score<S: AsRef<[u8]>>(motifs: &[S]) -> Result<usize> {
    Ok(MotifSet::new(motifs)?.score())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn motif_set() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..=8).prop_flat_map(|k| {
            proptest::collection::vec(
                proptest::collection::vec(
                    prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                    k,
                ),
                1..=10,
            )
        })
    }

    proptest! {
        #[test]
        fn score_zero_iff_all_match_consensus(motifs in motif_set()) {
            let set = MotifSet::new(&motifs).unwrap();
            let consensus = set.consensus();
            let all_match = set.iter().all(|m| m == consensus.as_slice());
            prop_assert_eq!(set.score() == 0, all_match);
        }

        #[test]
        fn score_bounded_by_cells(motifs in motif_set()) {
            let set = MotifSet::new(&motifs).unwrap();
            // The consensus base matches at least ceil(t/4) motifs per column.
            let t = set.len();
            let per_column = t - (t + 3) / 4;
            prop_assert!(set.score() <= per_column * set.k());
        }
    }
}
