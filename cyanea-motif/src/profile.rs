//! Count and profile matrices built from a motif set.
//!
//! Both matrices are stored column-major as `Vec<[_; 4]>` with one entry per
//! motif position, indexed A=0, C=1, G=2, T=3.
//!
//! The raw variants ([`CountMatrix::from_motifs`], [`Profile::from_motifs`])
//! can produce zero probabilities, which makes any k-mer containing an unseen
//! base impossible. The pseudocount variants seed every cell with 1
//! (Laplace's rule of succession) so every entry is at least `1 / (t + 4)`.

use cyanea_core::{CyaneaError, Result};

use crate::alphabet::{base_index, Nucleotide};
use crate::motifs::MotifSet;

/// Tolerance used when checking that profile columns sum to one.
const COLUMN_SUM_TOLERANCE: f64 = 1e-6;

/// Per-position nucleotide counts over a motif set.
///
/// Only ever built from motifs, so it serializes but does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountMatrix {
    /// `counts[pos] = [n_A, n_C, n_G, n_T]`, pseudocounts included.
    counts: Vec<[usize; 4]>,
    /// Number of motifs counted.
    n_motifs: usize,
    /// Value every cell was seeded with (0 or 1).
    pseudocount: usize,
}

impl CountMatrix {
    /// Count bases at every position of `motifs`.
    pub fn from_motifs(motifs: &MotifSet) -> Self {
        Self::from_rows(motifs.iter(), motifs.k(), 0)
    }

    /// Like [`from_motifs`](Self::from_motifs) but with every cell seeded at 1.
    pub fn with_pseudocounts(motifs: &MotifSet) -> Self {
        Self::from_rows(motifs.iter(), motifs.k(), 1)
    }

    /// Count pre-validated uppercase rows of length `k`.
    ///
    /// Zero rows is allowed; with a pseudocount this yields a uniform matrix.
    pub(crate) fn from_rows<'a>(
        rows: impl IntoIterator<Item = &'a [u8]>,
        k: usize,
        pseudocount: usize,
    ) -> Self {
        let mut counts = vec![[pseudocount; 4]; k];
        let mut n_motifs = 0;
        for row in rows {
            for (pos, &b) in row.iter().enumerate().take(k) {
                if let Some(idx) = base_index(b) {
                    counts[pos][idx] += 1;
                }
            }
            n_motifs += 1;
        }
        Self {
            counts,
            n_motifs,
            pseudocount,
        }
    }

    /// Motif length `k`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the matrix has zero positions.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of motifs that were counted (`t`).
    pub fn num_motifs(&self) -> usize {
        self.n_motifs
    }

    /// The value each cell was seeded with.
    pub fn pseudocount(&self) -> usize {
        self.pseudocount
    }

    /// Column total: `t` for raw counts, `t + 4` with pseudocounts.
    pub fn total(&self) -> usize {
        self.n_motifs + 4 * self.pseudocount
    }

    /// Count of `nt` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn get(&self, nt: Nucleotide, pos: usize) -> usize {
        self.counts[pos][nt.index()]
    }

    /// Counts for one symbol across all positions.
    pub fn row(&self, nt: Nucleotide) -> Vec<usize> {
        self.counts.iter().map(|col| col[nt.index()]).collect()
    }

    /// Divide every cell by the column total.
    pub fn to_profile(&self) -> Profile {
        let total = self.total().max(1) as f64;
        let matrix = self
            .counts
            .iter()
            .map(|col| {
                [
                    col[0] as f64 / total,
                    col[1] as f64 / total,
                    col[2] as f64 / total,
                    col[3] as f64 / total,
                ]
            })
            .collect();
        Profile { matrix }
    }

    /// Consensus: per position, the first symbol in A, C, T, G order with a
    /// strictly greater count than every earlier one.
    ///
    /// A column with no observations has no winner and yields `N`.
    pub fn consensus(&self) -> Vec<u8> {
        self.counts
            .iter()
            .map(|col| {
                let mut best = 0;
                let mut symbol = b'N';
                for nt in Nucleotide::CONSENSUS_ORDER {
                    if col[nt.index()] > best {
                        best = col[nt.index()];
                        symbol = nt.to_byte();
                    }
                }
                symbol
            })
            .collect()
    }
}

/// Per-position probability distribution over the four nucleotides.
///
/// Deserialization goes through [`Profile::from_matrix`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<[f64; 4]>", into = "Vec<[f64; 4]>")
)]
pub struct Profile {
    /// `matrix[pos] = [p_A, p_C, p_G, p_T]`.
    matrix: Vec<[f64; 4]>,
}

impl Profile {
    /// Raw frequency profile: counts divided by `t`. May contain zeros.
    pub fn from_motifs(motifs: &MotifSet) -> Self {
        CountMatrix::from_motifs(motifs).to_profile()
    }

    /// Pseudocount profile: (counts + 1) divided by `t + 4`. Strictly positive.
    pub fn with_pseudocounts(motifs: &MotifSet) -> Self {
        CountMatrix::with_pseudocounts(motifs).to_profile()
    }

    /// Use an explicit matrix, one `[p_A, p_C, p_G, p_T]` per position.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty, any entry is negative or not
    /// finite, or a column does not sum to 1.
    pub fn from_matrix(matrix: Vec<[f64; 4]>) -> Result<Self> {
        if matrix.is_empty() {
            return Err(CyaneaError::InvalidInput(
                "profile must have at least one position".into(),
            ));
        }
        for (pos, col) in matrix.iter().enumerate() {
            if col.iter().any(|p| !p.is_finite() || *p < 0.0) {
                return Err(CyaneaError::InvalidInput(format!(
                    "profile column {} has a negative or non-finite entry",
                    pos
                )));
            }
            let sum: f64 = col.iter().sum();
            if (sum - 1.0).abs() > COLUMN_SUM_TOLERANCE {
                return Err(CyaneaError::InvalidInput(format!(
                    "profile column {} sums to {}, expected 1",
                    pos, sum
                )));
            }
        }
        Ok(Self { matrix })
    }

    /// Motif length `k`.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Whether the profile has zero positions.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Probability of `nt` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn get(&self, nt: Nucleotide, pos: usize) -> f64 {
        self.matrix[pos][nt.index()]
    }

    /// The underlying column-major matrix.
    pub fn matrix(&self) -> &[[f64; 4]] {
        &self.matrix
    }
}

impl TryFrom<Vec<[f64; 4]>> for Profile {
    type Error = CyaneaError;

    fn try_from(matrix: Vec<[f64; 4]>) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<Profile> for Vec<[f64; 4]> {
    fn from(profile: Profile) -> Self {
        profile.matrix
    }
}

/// Count matrix of raw motif strings.
///
/// # Errors
///
/// Returns an error if `motifs` is empty, ragged, or contains non-ACGT bytes.
pub fn count<S: AsRef<[u8]>>(motifs: &[S]) -> Result<CountMatrix> {
    Ok(CountMatrix::from_motifs(&MotifSet::new(motifs)?))
}

/// Pseudocount matrix of raw motif strings.
pub fn count_with_pseudocounts<S: AsRef<[u8]>>(motifs: &[S]) -> Result<CountMatrix> {
    Ok(CountMatrix::with_pseudocounts(&MotifSet::new(motifs)?))
}

/// Raw frequency profile of motif strings.
pub fn profile<S: AsRef<[u8]>>(motifs: &[S]) -> Result<Profile> {
    Ok(Profile::from_motifs(&MotifSet::new(motifs)?))
}

/// Pseudocount profile of motif strings.
pub fn profile_with_pseudocounts<S: AsRef<[u8]>>(motifs: &[S]) -> Result<Profile> {
    Ok(Profile::with_pseudocounts(&MotifSet::new(motifs)?))
}
