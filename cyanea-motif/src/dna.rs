//! Validated collections of DNA sequences to search for motifs.

use cyanea_core::{CyaneaError, Result};

use crate::alphabet::Nucleotide;

/// An ordered, non-empty set of `t` DNA sequences over `ACGT`.
///
/// Construction uppercases and validates every byte. Sequences may have
/// different lengths; searches check that `k` fits the shortest one.
/// With the `serde` feature the set is (de)serialized as a list of strings
/// and re-validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct DnaSet {
    sequences: Vec<Vec<u8>>,
}

impl DnaSet {
    /// Build a set from raw sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if no sequences are given, a sequence is empty, or a
    /// byte other than `ACGT` (either case) appears.
    pub fn new<S: AsRef<[u8]>>(sequences: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut validated = Vec::new();
        for (i, seq) in sequences.into_iter().enumerate() {
            let seq = seq.as_ref();
            if seq.is_empty() {
                return Err(CyaneaError::InvalidInput(format!("sequence {} is empty", i)));
            }
            let mut bases = Vec::with_capacity(seq.len());
            for (pos, &b) in seq.iter().enumerate() {
                let nt = Nucleotide::from_byte(b).ok_or_else(|| {
                    CyaneaError::InvalidInput(format!(
                        "invalid DNA byte '{}' (0x{:02X}) at position {} of sequence {}",
                        b as char, b, pos, i
                    ))
                })?;
                bases.push(nt.to_byte());
            }
            validated.push(bases);
        }
        if validated.is_empty() {
            return Err(CyaneaError::InvalidInput(
                "at least one sequence is required".into(),
            ));
        }
        Ok(Self {
            sequences: validated,
        })
    }

    /// Number of sequences (`t`).
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Always `false`; a `DnaSet` holds at least one sequence.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The `i`-th sequence.
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        self.sequences.get(i).map(Vec::as_slice)
    }

    /// Iterate over the sequences in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.sequences.iter().map(Vec::as_slice)
    }

    /// Length of the shortest sequence.
    pub fn min_len(&self) -> usize {
        self.sequences.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Check that a caller-supplied sequence count matches this set.
    pub fn check_count(&self, t: usize) -> Result<()> {
        if t != self.len() {
            return Err(CyaneaError::InvalidInput(format!(
                "t = {} does not match the number of sequences ({})",
                t,
                self.len()
            )));
        }
        Ok(())
    }

    /// Check that `k`-mers can be drawn from every sequence.
    pub fn check_motif_len(&self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(CyaneaError::InvalidInput(
                "motif length must be at least 1".into(),
            ));
        }
        for (i, seq) in self.sequences.iter().enumerate() {
            if seq.len() < k {
                return Err(CyaneaError::InvalidInput(format!(
                    "sequence {} (length {}) is shorter than motif length {}",
                    i,
                    seq.len(),
                    k
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for DnaSet {
    type Error = CyaneaError;

    fn try_from(sequences: Vec<String>) -> Result<Self> {
        Self::new(sequences)
    }
}

impl From<DnaSet> for Vec<String> {
    fn from(dna: DnaSet) -> Self {
        dna.sequences
            .into_iter()
            .map(|seq| String::from_utf8_lossy(&seq).into_owned())
            .collect()
    }
}

impl std::ops::Index<usize> for DnaSet {
    type Output = [u8];

    fn index(&self, i: usize) -> &[u8] {
        &self.sequences[i]
    }
}
